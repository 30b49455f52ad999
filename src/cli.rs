//! CLI definitions for logdigest
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command handlers and tests can share them.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "logdigest")]
#[command(about = "Analyze log files in chunks with an LLM and collect a report")]
#[command(
    long_about = "logdigest - chunked LLM analysis of log files.

Every file ending in .log in a directory is split into overlapping chunks.
Each chunk is sent to an OpenAI-compatible chat completion service and the
answers are collected, in order, into a plain-text report.

QUICK START:
    logdigest analyze ./logs              Analyze ./logs/*.log
    logdigest analyze --mock ./logs       Dry run without calling the service
    logdigest config init                 Write the default config file

The API key is read from $OPENAI_API_KEY. Set MOCK_API=true to force the
offline mock backend."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show progress details in the log output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze every log file in a directory
    #[command(long_about = "Analyze every log file in a directory.

Files are processed in name order, chunks in text order, one request at a
time. Rate-limited requests are retried with exponential backoff; any other
failure is recorded in the report and processing continues.

The report is written to the output file and printed to stdout. Progress
and log messages go to stderr.

EXAMPLES:
    logdigest analyze ./logs
    logdigest analyze ./logs --output report.txt
    logdigest analyze ./logs --chunk-size 2000 --overlap 200
    logdigest analyze ./logs --mock --pacing-ms 0")]
    Analyze(AnalyzeArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Flags for `logdigest analyze`. Unset flags fall back to the config file.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Directory containing the log files
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// File name suffix that selects log files
    #[arg(long)]
    pub suffix: Option<String>,

    /// Report file to write
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum characters per chunk
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Characters shared by consecutive chunks
    #[arg(long, value_name = "N")]
    pub overlap: Option<usize>,

    /// Attempts per chunk while rate limited
    #[arg(long, value_name = "N")]
    pub max_retries: Option<usize>,

    /// Pause after every chunk in milliseconds
    #[arg(long, value_name = "MS")]
    pub pacing_ms: Option<u64>,

    /// First backoff delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub backoff_ms: Option<u64>,

    /// Use the offline mock backend
    #[arg(long)]
    pub mock: bool,

    /// Model name sent to the service
    #[arg(long)]
    pub model: Option<String>,

    /// Suppress the progress display on stderr
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values missing from the config file are shown with their defaults.

EXAMPLE:
    logdigest config show")]
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration file
    #[command(long_about = "Write the default configuration file.

Config file location: ~/.config/logdigest/config.toml
An existing file is kept unless --force is given.

EXAMPLE:
    logdigest config init
    logdigest config init --force")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
