//! User-friendly error handling for analysis operations.
//!
//! `AnalysisError` covers the failures that abort a whole run:
//!
//! - Invalid configuration (bad chunk size, overlap, or limits)
//! - I/O errors reading the source directory or writing the report
//!
//! Per-chunk service failures never surface here. They become failed
//! outcomes in the report instead (see `worker::ChunkOutcome`).

use std::fmt;

/// Error type for analysis operations.
///
/// All variants include user-friendly messages suitable for CLI output.
#[derive(Debug)]
pub enum AnalysisError {
    /// A configuration value is out of range.
    InvalidConfig {
        /// Name of the offending setting
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// IO error reading/writing files.
    IoError {
        /// Description of what operation failed
        operation: String,
        /// The underlying error message
        message: String,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidConfig { field, message } => {
                write!(f, "Invalid configuration: {} {}", field, message)
            }
            AnalysisError::IoError { operation, message } => {
                write!(f, "IO error during {}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

impl AnalysisError {
    /// Build an `InvalidConfig` error.
    pub fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        AnalysisError::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Build an `IoError` from an operation description and its cause.
    pub fn io(operation: impl Into<String>, error: &std::io::Error) -> Self {
        AnalysisError::IoError {
            operation: operation.into(),
            message: error.to_string(),
        }
    }

    /// Check if this error is a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(self, AnalysisError::InvalidConfig { .. })
    }
}
