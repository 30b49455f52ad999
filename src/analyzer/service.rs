//! AnalyzerService facade for orchestrating analysis operations.
//!
//! This module provides the main entry point for analyzing log files.
//!
//! # Workflow
//!
//! 1. Load log documents (file name order)
//! 2. Split each document into overlapping chunks
//! 3. Analyze each chunk with retry and backoff
//! 4. Pause for the pacing delay after every chunk
//! 5. Collect outcomes in order and build the report
//!
//! Processing is strictly sequential: report order depends on it and only
//! one request is ever in flight.

use std::path::Path;
use std::time::Duration;

use crate::config::AnalysisConfig;
use crate::logs::{LogDocument, LogLoader};

use super::backend::AnalysisClient;
use super::chunk::{ChunkConfig, Segmenter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use super::error::AnalysisError;
use super::pacing::{Sleeper, ThreadSleeper};
use super::progress::ProgressReporter;
use super::result::Report;
use super::tracker::{
    RetryPolicy, UsageSummary, UsageTracker, DEFAULT_BACKOFF_BASE, DEFAULT_MAX_RETRIES,
};
use super::worker::{ChunkOutcome, RetryExecutor};

/// Default pause after every chunk.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_secs(1);

/// Configuration options for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Maximum characters per chunk
    pub chunk_size: usize,
    /// Characters shared by consecutive chunks
    pub chunk_overlap: usize,
    /// Attempts per chunk while rate limited
    pub max_retries: usize,
    /// Pause after every chunk
    pub pacing_delay: Duration,
    /// Delay before the first retry (doubles per retry)
    pub backoff_base: Duration,
    /// Quiet mode (suppress progress output)
    pub quiet: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            max_retries: DEFAULT_MAX_RETRIES,
            pacing_delay: DEFAULT_PACING_DELAY,
            backoff_base: DEFAULT_BACKOFF_BASE,
            quiet: false,
        }
    }
}

impl AnalyzeOptions {
    /// Build options from the `[analysis]` config section.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
            max_retries: config.max_retries,
            pacing_delay: Duration::from_millis(config.pacing_delay_ms),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
            quiet: false,
        }
    }

    /// Set chunk size and overlap.
    pub fn chunking(mut self, size: usize, overlap: usize) -> Self {
        self.chunk_size = size;
        self.chunk_overlap = overlap;
        self
    }

    /// Set the attempt limit per chunk.
    pub fn max_retries(mut self, attempts: usize) -> Self {
        self.max_retries = attempts;
        self
    }

    /// Set the pause after every chunk.
    pub fn pacing(mut self, delay: Duration) -> Self {
        self.pacing_delay = delay;
        self
    }

    /// Set the backoff unit.
    pub fn backoff(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Enable quiet mode.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Validated chunking parameters.
    pub fn chunk_config(&self) -> Result<ChunkConfig, AnalysisError> {
        ChunkConfig::new(self.chunk_size, self.chunk_overlap)
    }

    /// Retry policy derived from these options.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.backoff_base)
    }
}

/// Outcome of one chunk together with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkResult {
    /// Index of the document in load order
    pub document: usize,
    /// Index of the chunk within its document
    pub chunk: usize,
    /// Start offset of the chunk in characters
    pub start: usize,
    /// Analysis outcome
    pub outcome: ChunkOutcome,
}

/// Result of an analysis run.
#[derive(Debug)]
pub struct AnalysisRun {
    /// One result per chunk, in processing order
    pub results: Vec<ChunkResult>,
    /// Usage summary for visibility
    pub usage: UsageSummary,
}

impl AnalysisRun {
    /// Outcomes in processing order.
    pub fn outcomes(&self) -> impl Iterator<Item = &ChunkOutcome> {
        self.results.iter().map(|r| &r.outcome)
    }

    /// Build the final report.
    pub fn report(&self) -> Report {
        Report::from_outcomes(self.outcomes())
    }

    /// Check if some chunks failed while others succeeded.
    pub fn is_partial(&self) -> bool {
        self.usage.is_partial()
    }
}

/// Main service for analyzing log documents.
///
/// Facade pattern - coordinates segmenter, retrying executor, and report.
pub struct AnalyzerService {
    options: AnalyzeOptions,
    segmenter: Segmenter,
    backend: Box<dyn AnalysisClient>,
    sleeper: Box<dyn Sleeper>,
}

impl AnalyzerService {
    /// Create a new analyzer service.
    ///
    /// Fails with `InvalidConfig` before any processing if the chunking
    /// parameters are out of range.
    pub fn new(
        options: AnalyzeOptions,
        backend: Box<dyn AnalysisClient>,
    ) -> Result<Self, AnalysisError> {
        let segmenter = Segmenter::new(options.chunk_config()?);
        Ok(Self {
            options,
            segmenter,
            backend,
            sleeper: Box::new(ThreadSleeper),
        })
    }

    /// Replace the delay capability (for testing).
    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Name of the configured backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// The options this service runs with.
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Load every matching file in `dir` and analyze it.
    pub fn analyze_directory(
        &self,
        dir: &Path,
        loader: &LogLoader,
    ) -> Result<AnalysisRun, AnalysisError> {
        let documents = loader.load(dir)?;
        Ok(self.run(&documents))
    }

    /// Analyze documents in order.
    ///
    /// Chunk failures become failed outcomes; the run always completes.
    pub fn run(&self, documents: &[LogDocument]) -> AnalysisRun {
        let total_chunks: usize = documents
            .iter()
            .map(|d| self.segmenter.chunk_count(d.char_len()))
            .sum();

        let mut progress = if self.options.quiet {
            ProgressReporter::quiet(total_chunks)
        } else {
            ProgressReporter::new(total_chunks)
        };
        progress.start(documents.len());

        let executor = RetryExecutor::new(
            &*self.backend,
            &*self.sleeper,
            self.options.retry_policy(),
        );
        let mut tracker = UsageTracker::new();
        let mut results = Vec::with_capacity(total_chunks);

        for (doc_index, document) in documents.iter().enumerate() {
            tracing::info!(
                "Analyzing {} with {}",
                document.path.display(),
                self.backend.name()
            );

            for chunk in self.segmenter.split(&document.content) {
                tracing::debug!(
                    document = doc_index,
                    chunk = chunk.index,
                    start = chunk.start,
                    "Submitting chunk"
                );

                let (outcome, usage) = executor.invoke_tracked(chunk.text);
                tracker.record(usage);
                results.push(ChunkResult {
                    document: doc_index,
                    chunk: chunk.index,
                    start: chunk.start,
                    outcome,
                });
                progress.chunk_completed();

                self.sleeper.sleep(self.options.pacing_delay);
            }
        }

        let usage = tracker.summary();
        progress.finish(&usage);
        tracing::info!(
            "Processed {} chunk(s): {} succeeded, {} failed",
            usage.chunks_processed,
            usage.successful_chunks,
            usage.failed_chunks
        );

        AnalysisRun { results, usage }
    }
}
