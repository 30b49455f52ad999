//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch workspace with an isolated home directory and a log directory.
pub struct Workspace {
    pub temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp.path().join("home")).expect("Failed to create home");
        fs::create_dir_all(temp.path().join("logs")).expect("Failed to create logs dir");
        Self { temp }
    }

    pub fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    pub fn logs(&self) -> PathBuf {
        self.temp.path().join("logs")
    }

    pub fn report(&self) -> PathBuf {
        self.temp.path().join("report.txt")
    }

    /// Write a file into the log directory.
    pub fn write_log(&self, name: &str, content: &str) -> PathBuf {
        let path = self.logs().join(name);
        fs::write(&path, content).expect("Failed to write log file");
        path
    }

    /// Write a config file into the workspace and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.temp.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Read the report file.
    pub fn read_report(&self) -> String {
        fs::read_to_string(self.report()).expect("Failed to read report")
    }

    /// The logdigest binary with an isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("logdigest").expect("binary exists");
        cmd.current_dir(self.temp.path())
            .env("HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("MOCK_API")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `analyze` in mock mode over the log directory with no pacing.
    pub fn analyze_mock(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("analyze")
            .arg(self.logs())
            .arg("--mock")
            .arg("--pacing-ms")
            .arg("0")
            .arg("--output")
            .arg(self.report());
        cmd
    }
}
