//! Log file discovery and loading.
//!
//! Reads every file in a directory whose name ends with a suffix (default
//! `.log`). Subdirectories are not searched. Files are returned sorted by
//! name so repeated runs process them in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::AnalysisError;

/// Default suffix for log files.
pub const DEFAULT_LOG_SUFFIX: &str = ".log";

/// Raw text of one log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDocument {
    /// Where the text was read from
    pub path: PathBuf,
    /// Full file content
    pub content: String,
}

impl LogDocument {
    /// Create a document from in-memory text.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn read(path: &Path) -> Result<Self, AnalysisError> {
        let bytes = fs::read(path)
            .map_err(|e| AnalysisError::io(format!("reading {}", path.display()), &e))?;

        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    "{} is not valid UTF-8; invalid bytes were replaced",
                    path.display()
                );
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// File name for display.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Length of the content in characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Finds and loads log files from a directory.
#[derive(Debug, Clone)]
pub struct LogLoader {
    suffix: String,
}

impl Default for LogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_SUFFIX)
    }
}

impl LogLoader {
    /// Create a loader that accepts files ending in `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The accepted file name suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Check whether a file name matches the suffix.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix)
    }

    /// List matching files directly inside `dir`, sorted by file name.
    pub fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
        let entries = fs::read_dir(dir).map_err(|e| {
            AnalysisError::io(format!("reading log directory {}", dir.display()), &e)
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                AnalysisError::io(format!("reading log directory {}", dir.display()), &e)
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| self.matches(n))
                .unwrap_or(false);
            if matches {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    /// Load every matching file in `dir`.
    pub fn load(&self, dir: &Path) -> Result<Vec<LogDocument>, AnalysisError> {
        let paths = self.list(dir)?;
        tracing::info!(
            "Found {} file(s) matching *{} in {}",
            paths.len(),
            self.suffix,
            dir.display()
        );
        paths.iter().map(|p| LogDocument::read(p)).collect()
    }
}
