//! Configuration management for logdigest

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/logdigest/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parse and validate configuration text
    pub fn parse(contents: &str) -> Result<Self> {
        io::parse(contents)
    }

    /// Save configuration to the default location, returning the path written
    pub fn save(&self) -> Result<PathBuf> {
        io::save(self)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Directory to scan for logs
    pub fn input_directory(&self) -> PathBuf {
        PathBuf::from(&self.input.directory)
    }

    /// Report file location
    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.output.report_file)
    }
}
