use crate::OutputFormat;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Append total seconds to text output
    #[serde(default)]
    pub show_seconds: bool,
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.show_seconds && matches!(self.output.format, OutputFormat::Json) {
            eprintln!("Warning: output.show_seconds has no effect with JSON output");
        }
        Ok(())
    }
}

pub fn default_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".hms-duration");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}

pub fn load() -> Result<Config> {
    load_from_path(default_path()?)
}

/// Like [`load`], but a missing file falls back to defaults with a warning.
/// A file that exists and fails to parse is still an error.
pub fn load_or_default() -> Result<Config> {
    let path = default_path()?;
    if !path.exists() {
        eprintln!(
            "Warning: No config found at {}, using defaults.",
            path.display()
        );
        return Ok(Config::default());
    }
    load_from_path(&path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
