//! Report aggregation and persistence.
//!
//! - `aggregate` joins chunk outcomes into the report text
//! - `Report` owns the ordered entries of a finished run
//! - `ReportWriter` writes the report to disk

use std::fs;
use std::path::Path;

use super::error::AnalysisError;
use super::worker::ChunkOutcome;

/// Separator between report entries (one blank line).
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Join outcomes into the report text, preserving their order.
///
/// An empty slice yields an empty string.
pub fn aggregate(outcomes: &[ChunkOutcome]) -> String {
    outcomes
        .iter()
        .map(ChunkOutcome::display)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

/// Final ordered report of a run.
///
/// Holds only display strings; no reference back to chunks or documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<String>,
}

impl Report {
    /// Build a report from outcomes in processing order.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a ChunkOutcome>,
    {
        Self {
            entries: outcomes.into_iter().map(ChunkOutcome::display).collect(),
        }
    }

    /// Entries in report order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries (one per chunk).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The report text.
    pub fn render(&self) -> String {
        self.entries.join(ENTRY_SEPARATOR)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Writes reports to disk.
pub struct ReportWriter;

impl ReportWriter {
    /// Write the report to `path`, creating parent directories as needed.
    ///
    /// An empty report produces an empty file.
    pub fn write(path: &Path, report: &Report) -> Result<(), AnalysisError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AnalysisError::io(format!("creating directory {}", parent.display()), &e)
            })?;
        }

        fs::write(path, report.render())
            .map_err(|e| AnalysisError::io(format!("writing report {}", path.display()), &e))?;

        tracing::info!("Wrote {} report entries to {}", report.len(), path.display());
        Ok(())
    }
}
