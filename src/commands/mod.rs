//! Command handlers for the logdigest CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod analyze;
pub mod config;

use anyhow::Result;
use std::path::Path;

use logdigest::Config;

/// Load the configuration for a command.
///
/// An explicit `--config` file must exist; otherwise the default location
/// is used and a missing file means defaults. Environment overrides are
/// applied last.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env();
    Ok(config)
}
