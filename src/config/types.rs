//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::analyzer::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::logs::DEFAULT_LOG_SUFFIX;

/// Environment variable that forces the mock backend when set to `true`.
pub const MOCK_API_ENV: &str = "MOCK_API";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.suffix.is_empty() {
            return Err("input.suffix must not be empty".to_string());
        }
        if self.output.report_file.trim().is_empty() {
            return Err("output.report_file must not be empty".to_string());
        }
        self.analysis.validate()?;
        self.service.validate()
    }

    /// Apply overrides from the process environment.
    ///
    /// `MOCK_API=true` selects the mock backend.
    pub fn apply_env(&mut self) {
        let value = std::env::var(MOCK_API_ENV).ok();
        if mock_requested(value.as_deref()) {
            self.service.mock = true;
        }
    }
}

/// Whether a `MOCK_API` value asks for mock mode (case-insensitive `true`).
pub fn mock_requested(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Where log files are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory scanned for log files (not recursive)
    #[serde(default = "default_input_directory")]
    pub directory: String,
    /// File name suffix that selects log files
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

pub fn default_input_directory() -> String {
    ".".to_string()
}

pub fn default_suffix() -> String {
    DEFAULT_LOG_SUFFIX.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: default_input_directory(),
            suffix: default_suffix(),
        }
    }
}

/// Where the report is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

pub fn default_report_file() -> String {
    "log_analysis_report.txt".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: default_report_file(),
        }
    }
}

/// Chunking, retry and pacing parameters.
///
/// CLI flags take priority over config, which overrides defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum characters per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Characters shared by consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
    /// Attempts per chunk while rate limited
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    /// Pause after every chunk, in milliseconds
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,
    /// First backoff delay, in milliseconds (doubles per retry)
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

pub fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

pub fn default_chunk_overlap() -> usize {
    DEFAULT_CHUNK_OVERLAP
}

pub fn default_max_retries() -> usize {
    5
}

pub fn default_pacing_delay_ms() -> u64 {
    1000
}

pub fn default_backoff_base_ms() -> u64 {
    1000
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            max_retries: default_max_retries(),
            pacing_delay_ms: default_pacing_delay_ms(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

impl AnalysisConfig {
    /// Validate chunking values.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("analysis.chunk_size must be > 0".to_string());
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(format!(
                "analysis.chunk_overlap {} must be smaller than analysis.chunk_size {}",
                self.chunk_overlap, self.chunk_size
            ));
        }
        Ok(())
    }
}

/// Remote analysis service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Use the offline mock backend instead of the real service
    #[serde(default)]
    pub mock: bool,
    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model name sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

pub fn default_timeout_secs() -> u64 {
    120
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mock: false,
            api_base: default_api_base(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Validate service values.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("service.timeout_secs must be > 0".to_string());
        }
        if self.timeout_secs > 3600 {
            return Err(format!(
                "service.timeout_secs {} exceeds maximum (3600s)",
                self.timeout_secs
            ));
        }
        if !self.mock && self.api_base.trim().is_empty() {
            return Err("service.api_base must not be empty".to_string());
        }
        Ok(())
    }
}
