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
    /// Uses `~/.config/newsreel/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("newsreel").join("config.toml")
    }

    /// Returns the path of the log file used by the interactive UI.
    pub fn log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("newsreel").join("newsreel.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an absolute URL
    /// - `api.language` is not empty
    /// - page sizes and the debounce delay are at least 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.api.base_url).is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' is not a valid URL", self.api.base_url),
            });
        }

        if self.api.language.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.language must not be empty".to_string(),
            });
        }

        let sizes = [
            ("feed.page_size", self.feed.page_size),
            ("feed.batch_size", self.feed.batch_size),
            ("feed.items_per_page", self.feed.items_per_page),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("{} must be at least 1", name),
            });
        }

        if self.feed.debounce_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "feed.debounce_ms must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
