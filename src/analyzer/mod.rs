//! Chunked LLM analysis of log files.
//!
//! Log text is too large for a single request, so each document is split
//! into overlapping chunks and every chunk is analyzed on its own. Results
//! are collected in order into a plain-text report.
//!
//! # Pipeline
//!
//! 1. [`chunk`] splits text into overlapping character windows
//! 2. [`backend`] sends one chunk to the analysis service
//! 3. [`worker`] retries rate-limited calls with exponential backoff
//! 4. [`service`] drives documents and chunks sequentially with pacing
//! 5. [`result`] joins outcomes into the report and writes it
//!
//! # Module Structure
//!
//! - [`backend`] - Analysis client trait and implementations
//! - [`chunk`] - Segmenter and chunk types
//! - [`error`] - Error types for analysis operations
//! - [`pacing`] - Injectable delay capability
//! - [`progress`] - Progress line on stderr
//! - [`prompt`] - Prompt template rendering
//! - [`result`] - Report aggregation and persistence
//! - [`service`] - AnalyzerService facade
//! - [`tracker`] - Retry policy and usage statistics
//! - [`worker`] - Retrying invocation of the backend

pub mod backend;
pub mod chunk;
pub mod error;
pub mod pacing;
pub mod progress;
pub mod prompt;
pub mod result;
pub mod service;
pub mod tracker;
pub mod worker;

// Re-export main types
pub use backend::{
    AnalysisClient, BackendError, BackendKind, BackendResult, MockBackend, OpenAiBackend,
    RateLimitInfo,
};
pub use chunk::{ChunkConfig, LogChunk, Segmenter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use error::AnalysisError;
pub use pacing::{RecordingSleeper, Sleeper, ThreadSleeper};
pub use progress::ProgressReporter;
pub use prompt::build_analyze_prompt;
pub use result::{aggregate, Report, ReportWriter};
pub use service::{AnalysisRun, AnalyzeOptions, AnalyzerService, ChunkResult};
pub use tracker::{RetryPolicy, UsageSummary, UsageTracker};
pub use worker::{ChunkOutcome, RetryExecutor, REPEATED_ERRORS};
