//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Get the config file path (~/.config/logdigest/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Get the config directory path (~/.config/logdigest)
fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("logdigest"))
}

/// Load configuration from the default location, or return defaults if not found
pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    if config_path.exists() {
        load_from(&config_path)
    } else {
        Ok(Config::default())
    }
}

/// Load configuration from an explicit file, which must exist
pub fn load_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    parse(&contents).with_context(|| format!("Failed to load config file: {:?}", path))
}

/// Parse and validate configuration text
pub fn parse(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).context("Failed to parse config")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    Ok(config)
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf> {
    let config_path = config_path()?;
    save_to(config, &config_path)?;
    Ok(config_path)
}

/// Save configuration to an explicit file
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    // Ensure config directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
