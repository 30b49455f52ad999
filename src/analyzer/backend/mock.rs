//! Mock backend implementation.
//!
//! Produces a deterministic result from the chunk text without any network
//! access. Selected by `service.mock = true`, `--mock`, or `MOCK_API=true`.

use super::{AnalysisClient, BackendResult};

/// Number of leading characters echoed into the mock result.
const PREVIEW_CHARS: usize = 50;

/// Offline backend that never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBackend;

impl MockBackend {
    /// Create a new mock backend.
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisClient for MockBackend {
    fn name(&self) -> &'static str {
        "Mock"
    }

    fn analyze(&self, chunk_text: &str) -> BackendResult<String> {
        let preview: String = chunk_text.chars().take(PREVIEW_CHARS).collect();
        Ok(format!("Log Analyze: {}...", preview))
    }
}
