//! Retrying invocation of the analysis backend.
//!
//! # Design
//!
//! - `ChunkOutcome` is the success-or-failure result for one chunk
//! - `RetryExecutor` calls the backend with exponential backoff on rate limits
//! - Backoff goes through the injected `Sleeper`
//!
//! # Retry Strategy
//!
//! 1. Call the backend
//! 2. Rate limited: wait `base * 2^attempt`, then try again
//! 3. Any other error: give up on this chunk immediately
//! 4. Still rate limited after the last attempt: fail with "repeated errors"

use std::fmt;
use std::time::{Duration, Instant};

use crate::analyzer::backend::AnalysisClient;
use crate::analyzer::pacing::Sleeper;
use crate::analyzer::tracker::{ChunkUsage, RetryPolicy};

/// Failure reason when retries run out while still rate limited.
pub const REPEATED_ERRORS: &str = "repeated errors";

/// Result of analyzing one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// The backend's analysis text
    Success(String),
    /// The chunk could not be analyzed
    Failure {
        /// Human-readable reason
        reason: String,
    },
}

impl ChunkOutcome {
    /// Create a failed outcome.
    pub fn failure(reason: impl Into<String>) -> Self {
        ChunkOutcome::Failure {
            reason: reason.into(),
        }
    }

    /// Check if this outcome is successful.
    pub fn is_success(&self) -> bool {
        matches!(self, ChunkOutcome::Success(_))
    }

    /// Check if this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The string this outcome contributes to the report.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChunkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkOutcome::Success(text) => write!(f, "{}", text),
            ChunkOutcome::Failure { reason } => {
                write!(f, "Log analysis failed due to {}.", reason)
            }
        }
    }
}

/// Executor that retries rate-limited backend calls with backoff.
pub struct RetryExecutor<'a, B: AnalysisClient + ?Sized, S: Sleeper + ?Sized> {
    backend: &'a B,
    sleeper: &'a S,
    policy: RetryPolicy,
}

impl<'a, B: AnalysisClient + ?Sized, S: Sleeper + ?Sized> RetryExecutor<'a, B, S> {
    /// Create a new executor.
    pub fn new(backend: &'a B, sleeper: &'a S, policy: RetryPolicy) -> Self {
        Self {
            backend,
            sleeper,
            policy,
        }
    }

    /// The retry policy in use.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Analyze one chunk, retrying on rate limits.
    pub fn invoke(&self, chunk_text: &str) -> ChunkOutcome {
        self.invoke_tracked(chunk_text).0
    }

    /// Analyze one chunk and report attempts and backoff alongside the outcome.
    pub fn invoke_tracked(&self, chunk_text: &str) -> (ChunkOutcome, ChunkUsage) {
        let started = Instant::now();
        let mut attempts = 0;
        let mut backoff = Duration::ZERO;

        let outcome = loop {
            if attempts >= self.policy.max_attempts {
                break ChunkOutcome::failure(REPEATED_ERRORS);
            }
            let attempt = attempts;
            attempts += 1;

            match self.backend.analyze(chunk_text) {
                Ok(text) => break ChunkOutcome::Success(text),
                Err(err) if err.is_retryable() => {
                    // The last attempt fails at once, with no trailing backoff
                    if !self.policy.should_retry(attempt) {
                        tracing::error!(
                            attempts,
                            "{} still rate limited after final attempt: {}",
                            self.backend.name(),
                            err
                        );
                        break ChunkOutcome::failure(REPEATED_ERRORS);
                    }
                    let delay = self.policy.delay_for_attempt(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        "{}. Retrying in {:?}...",
                        err,
                        delay
                    );
                    self.sleeper.sleep(delay);
                    backoff = backoff.saturating_add(delay);
                }
                Err(err) => {
                    tracing::error!("{} failed: {}", self.backend.name(), err);
                    break ChunkOutcome::failure(err.to_string());
                }
            }
        };

        let usage = ChunkUsage {
            attempts,
            backoff,
            duration: started.elapsed(),
            success: outcome.is_success(),
        };
        (outcome, usage)
    }
}
