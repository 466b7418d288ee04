use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::confessions::{default_confessions, Confession};
use crate::config::types::Config;
use crate::ui::nav::AddressMap;

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
    /// Uses `~/.config/erocras/config.toml` on Unix/macOS, or the
    /// equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("erocras").join("config.toml")
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every page has a distinct address
    /// - Dwell and reveal intervals are non-zero
    /// - An enabled intro has at least one step
    /// - Custom confessions have text
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.address_map()?;

        let timing = &self.timing;
        for (name, value) in [
            ("timing.dwell_ms", timing.dwell_ms),
            ("timing.text_interval_ms", timing.text_interval_ms),
            ("timing.tagline_interval_ms", timing.tagline_interval_ms),
            ("forms.suggestion_interval_ms", self.forms.suggestion_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be greater than zero", name),
                });
            }
        }

        if self.intro.enabled && self.intro.step_ms.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "intro is enabled but intro.step_ms is empty".to_string(),
            });
        }

        if let Some(position) = self
            .confessions
            .iter()
            .position(|c| c.text.trim().is_empty())
        {
            return Err(ConfigError::ValidationError {
                message: format!("confession {} has no text", position + 1),
            });
        }

        Ok(())
    }

    /// Page addresses built from `[routes]`.
    pub fn address_map(&self) -> Result<AddressMap, ConfigError> {
        AddressMap::from_routes(&self.routes).map_err(|e| ConfigError::ValidationError {
            message: e.to_string(),
        })
    }

    /// The confession deck: `[[confessions]]` when given, the built-in deck
    /// otherwise.
    pub fn dataset(&self) -> Arc<[Confession]> {
        if self.confessions.is_empty() {
            default_confessions()
        } else {
            self.confessions.iter().cloned().collect()
        }
    }
}
