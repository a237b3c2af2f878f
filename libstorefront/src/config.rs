//! Configuration management for Storefront

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the storefront API; products live at `{base_url}/products`
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: LogFormat,
    pub level: String,
    /// Write logs here instead of stderr (tilde is expanded)
    pub file: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields defaults. Environment overrides are applied last.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Apply `STOREFRONT_API_URL`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("STOREFRONT_API_URL") {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        self
    }

    /// Log file path with `~` expanded, if one is configured
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("STOREFRONT_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("storefront").join("config.toml"))
}

/// Resolve the cache directory used for log files
pub fn resolve_cache_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .ok_or_else(|| ConfigError::MissingField("cache directory".to_string()))?;

    Ok(cache_dir.join("storefront"))
}
