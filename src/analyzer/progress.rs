//! Progress reporting for chunk analysis.
//!
//! Writes a single self-updating progress line to stderr so stdout stays
//! reserved for the report.

use std::io::{self, Write};

use super::tracker::UsageSummary;

/// Progress reporter that writes to stderr.
pub struct ProgressReporter {
    /// Chunks finished so far
    completed: usize,
    /// Total number of chunks in the run
    total: usize,
    /// Whether to show output (disabled in quiet mode)
    show_output: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter.
    pub fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
            show_output: true,
        }
    }

    /// Create a progress reporter with output disabled.
    pub fn quiet(total: usize) -> Self {
        Self {
            completed: 0,
            total,
            show_output: false,
        }
    }

    /// Report that analysis is starting.
    pub fn start(&self, document_count: usize) {
        if !self.show_output {
            return;
        }
        eprintln!(
            "Analyzing {} log file{} ({} chunk{})...",
            document_count,
            plural(document_count),
            self.total,
            plural(self.total)
        );
    }

    /// Report that one chunk has completed.
    ///
    /// Returns the new count of completed chunks.
    pub fn chunk_completed(&mut self) -> usize {
        self.completed += 1;

        if self.show_output {
            eprint!("\r  [{}/{}] Processing chunks...", self.completed, self.total);
            let _ = io::stderr().flush();
        }

        self.completed
    }

    /// Report that all chunks have completed.
    pub fn finish(&self, summary: &UsageSummary) {
        if !self.show_output {
            return;
        }

        // Clear the progress line
        if self.total > 0 {
            eprint!("\r                                                    \r");
        }

        if summary.failed_chunks == 0 {
            eprintln!(
                "Analyzed {} chunk{}",
                summary.chunks_processed,
                plural(summary.chunks_processed)
            );
        } else {
            eprintln!(
                "Analysis partially complete: {}/{} chunks analyzed, {} failed",
                summary.successful_chunks, summary.chunks_processed, summary.failed_chunks
            );
        }
    }

    /// Get current progress (completed, total).
    pub fn get_progress(&self) -> (usize, usize) {
        (self.completed, self.total)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
