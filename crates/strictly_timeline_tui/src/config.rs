//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_timeline::DisplayOrder;
use tracing::{debug, info, instrument};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_timeline.toml";

/// Settings for the terminal frontend.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Start with the move list in descending order.
    #[serde(default)]
    descending: bool,

    /// File that receives logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_timeline.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            descending: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(descending = config.descending, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given; otherwise loads [`DEFAULT_CONFIG_FILE`] when it
    /// exists and falls back to defaults when it does not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy that starts descending regardless of the file.
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending |= descending;
        self
    }

    /// Initial move list order.
    pub fn display_order(&self) -> DisplayOrder {
        if self.descending {
            DisplayOrder::Descending
        } else {
            DisplayOrder::Ascending
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TuiConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.display_order(), DisplayOrder::Ascending);
    }

    #[test]
    fn test_descending_from_toml() {
        let config = TuiConfig::from_toml("descending = true\nlog_filter = \"debug\"")
            .expect("valid config");
        assert_eq!(config.display_order(), DisplayOrder::Descending);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = TuiConfig::from_toml("descending = \"sometimes\"").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }

    #[test]
    fn test_missing_named_file_is_error() {
        assert!(TuiConfig::load(Some(Path::new("definitely/not/here.toml"))).is_err());
    }
}
