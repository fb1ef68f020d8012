//! Configuration file loading

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arli_core::PartialOptions;

use crate::error::CliError;

/// On-disk configuration syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document (the default)
    Toml,
    /// JSON object
    Json,
}

impl ConfigFormat {
    /// Pick the syntax from the file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    /// Parse a configuration document
    pub fn parse(&self, content: &str) -> Result<PartialOptions, CliError> {
        let options = match self {
            ConfigFormat::Toml => PartialOptions::from_toml_str(content)?,
            ConfigFormat::Json => PartialOptions::from_json_str(content)?,
        };
        Ok(options)
    }
}

/// Load partial options from a configuration file
pub fn load_partial_options(path: &Path) -> Result<PartialOptions> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let options = ConfigFormat::from_path(path)
        .parse(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    log::debug!("Loaded options from {}: {:?}", path.display(), options);
    Ok(options)
}
