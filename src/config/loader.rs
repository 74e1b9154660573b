use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/thesaurus/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("thesaurus").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - base_url is an http(s) URL
    /// - relation is non-empty
    /// - request timeout, if set, is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lookup = &self.lookup;

        if !(lookup.base_url.starts_with("http://") || lookup.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "lookup.base_url '{}' must start with http:// or https://",
                    lookup.base_url
                ),
            });
        }

        if lookup.relation.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "lookup.relation must not be empty".to_string(),
            });
        }

        if lookup.request_timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "lookup.request_timeout_seconds must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
