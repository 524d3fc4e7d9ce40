// File: src/config.rs
// Purpose: Configuration parsing from rhtmx-urls.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::route::ParamCountPolicy;

/// Reverse-routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UrlsConfig {
    #[serde(default)]
    pub reverse: ReverseConfig,
}

/// Settings applied by `RouteTree` when filling templates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReverseConfig {
    /// Treatment of leftover positional values ("lenient" or "strict")
    #[serde(default)]
    pub param_count: ParamCountPolicy,
}

impl UrlsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: UrlsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rhtmx-urls.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx-urls.toml")
    }
}
