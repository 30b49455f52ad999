//! Retry policy and usage tracking for analysis.
//!
//! This module provides:
//! - `RetryPolicy` - attempt limit and exponential backoff schedule
//! - `UsageTracker` - Observer pattern for per-chunk metrics
//! - `ChunkUsage` - per-chunk usage information
//!
//! # Retry Strategy
//!
//! - Up to 5 attempts per chunk by default
//! - Exponential backoff with base 2: 1s -> 2s -> 4s -> 8s
//! - Only rate limits are retried
//! - No wait after the final attempt

use std::time::{Duration, Instant};

/// Default number of attempts per chunk.
pub const DEFAULT_MAX_RETRIES: usize = 5;

/// Default backoff unit (the delay before the first retry).
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one
    pub max_attempts: usize,
    /// Delay before the first retry; doubles for every later retry
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BACKOFF_BASE,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy with custom settings.
    pub fn new(max_attempts: usize, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Calculate delay after a failed attempt (0-indexed).
    ///
    /// Uses exponential backoff: delay = base * 2^attempt, saturating.
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let factor = u32::try_from(attempt)
            .ok()
            .and_then(|exp| 2u32.checked_pow(exp));
        match factor {
            Some(factor) => self.base_delay.saturating_mul(factor),
            None => Duration::MAX,
        }
    }

    /// Check if another attempt may follow a failed `attempt` (0-indexed).
    pub fn should_retry(&self, attempt: usize) -> bool {
        attempt + 1 < self.max_attempts
    }
}

/// Usage information for a single chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkUsage {
    /// Number of attempts made
    pub attempts: usize,
    /// Total backoff requested between attempts
    pub backoff: Duration,
    /// Wall-clock time spent on this chunk, backoff included
    pub duration: Duration,
    /// Whether analysis succeeded
    pub success: bool,
}

/// Summary report of analysis usage.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSummary {
    /// Number of chunks processed
    pub chunks_processed: usize,
    /// Number of successful chunks
    pub successful_chunks: usize,
    /// Number of failed chunks
    pub failed_chunks: usize,
    /// Total attempts across all chunks
    pub total_attempts: usize,
    /// Attempts beyond the first, across all chunks
    pub total_retries: usize,
    /// Total backoff requested
    pub total_backoff: Duration,
    /// Total duration of analysis
    pub total_duration: Duration,
    /// Success rate (0.0 - 1.0)
    pub success_rate: f64,
}

impl UsageSummary {
    /// Whether some chunks failed while others succeeded.
    pub fn is_partial(&self) -> bool {
        self.failed_chunks > 0 && self.successful_chunks > 0
    }
}

/// Tracks analysis metrics.
///
/// Implements Observer pattern - receives a record per chunk from the
/// service and maintains aggregate statistics.
#[derive(Debug)]
pub struct UsageTracker {
    /// Usage records for each chunk, in processing order
    chunk_usage: Vec<ChunkUsage>,
    /// Start time of analysis
    start_time: Instant,
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageTracker {
    /// Create a new tracker.
    pub fn new() -> Self {
        Self {
            chunk_usage: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Record usage for a chunk.
    pub fn record(&mut self, usage: ChunkUsage) {
        self.chunk_usage.push(usage);
    }

    /// Get all chunk usages.
    pub fn all_chunks(&self) -> &[ChunkUsage] {
        &self.chunk_usage
    }

    /// Get total elapsed time since tracking started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Generate usage summary.
    pub fn summary(&self) -> UsageSummary {
        let chunks_processed = self.chunk_usage.len();
        let successful_chunks = self.chunk_usage.iter().filter(|u| u.success).count();
        let failed_chunks = chunks_processed - successful_chunks;

        let total_attempts: usize = self.chunk_usage.iter().map(|u| u.attempts).sum();
        let total_retries: usize = self
            .chunk_usage
            .iter()
            .map(|u| u.attempts.saturating_sub(1)) // First attempt isn't a retry
            .sum();
        let total_backoff: Duration = self.chunk_usage.iter().map(|u| u.backoff).sum();

        let success_rate = if chunks_processed > 0 {
            successful_chunks as f64 / chunks_processed as f64
        } else {
            0.0
        };

        UsageSummary {
            chunks_processed,
            successful_chunks,
            failed_chunks,
            total_attempts,
            total_retries,
            total_backoff,
            total_duration: self.elapsed(),
            success_rate,
        }
    }

    /// Format summary for display.
    pub fn format_summary(&self) -> String {
        format_summary(&self.summary())
    }
}

/// Format a usage summary for display on stderr.
pub fn format_summary(summary: &UsageSummary) -> String {
    let mut output = String::new();

    output.push_str("Analysis Summary:\n");
    output.push_str(&format!(
        "   Chunks processed: {}\n",
        summary.chunks_processed
    ));
    output.push_str(&format!(
        "   Succeeded: {}  Failed: {}\n",
        summary.successful_chunks, summary.failed_chunks
    ));
    output.push_str(&format!("   Retries: {}\n", summary.total_retries));
    output.push_str(&format!(
        "   Backoff: {}\n",
        format_duration(summary.total_backoff)
    ));
    output.push_str(&format!(
        "   Total duration: {}\n",
        format_duration(summary.total_duration)
    ));
    output.push_str(&format!(
        "   Success rate: {:.0}%",
        summary.success_rate * 100.0
    ));

    output
}

/// Format a duration as `1m 05s`, `12.3s`, or `450ms`.
fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else if secs >= 1 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}
