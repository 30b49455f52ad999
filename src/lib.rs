//! logdigest library
//!
//! Splits log files into overlapping chunks, sends each chunk to an LLM
//! analysis service with retry and pacing, and collects the results into
//! a plain-text report.

pub mod analyzer;
pub mod config;
pub mod logs;

pub use analyzer::{AnalysisError, AnalyzeOptions, AnalyzerService, ChunkOutcome, Report};
pub use config::Config;
pub use logs::{LogDocument, LogLoader};
