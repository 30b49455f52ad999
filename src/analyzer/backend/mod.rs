//! Analysis backends for LLM log analysis.
//!
//! This module provides the Strategy pattern for the text-analysis service.
//! Each backend turns one chunk of log text into a free-form analysis.
//!
//! # Supported Backends
//!
//! - **OpenAI**: POSTs the analysis prompt to an OpenAI-compatible
//!   `/chat/completions` endpoint
//! - **Mock**: deterministic offline result, used for tests and dry runs
//!
//! # Design
//!
//! The `AnalysisClient` trait defines the interface for all backends.
//! A backend is chosen once through `BackendKind::create_backend` and then
//! injected into the analyzer service; nothing downstream knows which one
//! is active.

mod mock;
mod openai;

pub use mock::MockBackend;
pub use openai::OpenAiBackend;

use crate::config::ServiceConfig;
use std::time::Duration;
use thiserror::Error;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Trait for text-analysis backends (Strategy pattern).
///
/// Implementors are stateless per call and must be thread-safe.
pub trait AnalysisClient: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Analyze one chunk of log text and return the raw analysis.
    ///
    /// Returns `BackendError::RateLimited` when the caller should back off
    /// and retry; every other error is final for this chunk.
    fn analyze(&self, chunk_text: &str) -> BackendResult<String>;
}

/// Backend types supported for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    OpenAi,
    Mock,
}

impl BackendKind {
    /// Pick the backend for a service configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        if config.mock {
            BackendKind::Mock
        } else {
            BackendKind::OpenAi
        }
    }

    /// Create the appropriate backend for this kind.
    pub fn create_backend(&self, config: &ServiceConfig) -> BackendResult<Box<dyn AnalysisClient>> {
        match self {
            BackendKind::OpenAi => Ok(Box::new(OpenAiBackend::from_config(config)?)),
            BackendKind::Mock => Ok(Box::new(MockBackend::new())),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::OpenAi => write!(f, "OpenAI"),
            BackendKind::Mock => write!(f, "Mock"),
        }
    }
}

/// Errors from analysis backends.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("rate limited: {0}")]
    RateLimited(RateLimitInfo),

    #[error("service error (HTTP {status}): {}", truncate_message(message))]
    Service { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
}

impl BackendError {
    /// Whether the caller should back off and try again.
    ///
    /// Only rate limiting is transient; everything else is final for the chunk.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BackendError::RateLimited(_))
    }
}

/// Rate limit information extracted from a service response.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// When the rate limit resets (if provided by the service)
    pub retry_after: Option<Duration>,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for RateLimitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(retry_after) = self.retry_after {
            write!(f, "{} (retry after {:?})", self.message, retry_after)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Parse a `Retry-After` header value given in seconds.
///
/// HTTP-date values are ignored; backoff does not depend on them.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let trimmed = value.trim();
    if let Ok(secs) = trimmed.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(Duration::from_secs_f64)
}

/// Truncate a service message for error display.
///
/// Takes the first line and limits to 200 characters for readability.
fn truncate_message(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= 200 {
        first_line.to_string()
    } else {
        let truncated: String = first_line.chars().take(200).collect();
        format!("{}...", truncated)
    }
}
