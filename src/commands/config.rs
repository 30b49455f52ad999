//! Config subcommands handler

use anyhow::{Context, Result};
use std::path::Path;

use logdigest::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}

/// Write the default configuration file.
///
/// An existing file is left untouched unless `force` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let target = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    if target.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\nUse --force to overwrite it.",
            target.display()
        );
    }

    let config = Config::default();
    let written = match explicit {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };
    println!("Wrote default configuration to {}", written.display());
    Ok(())
}

/// Render a configuration as TOML text.
pub fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
