//! Configuration management.
//!
//! Settings come from, in increasing precedence:
//! 1. Built-in defaults
//! 2. A TOML file (`--config <path>`, or `<config_dir>/promptkit/config.toml`)
//! 3. Environment variables (`PROMPTKIT_*`)
//!
//! ```toml
//! [similarity]
//! threshold = 0.8
//!
//! [logging]
//! format = "json"
//! filter = "promptkit=debug"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::observability::{LogFormat, LoggingConfig};
use crate::services::deduplication::{DeduplicationConfig, threshold_from_env, validate_threshold};
use crate::{Error, Result};

/// Main configuration for promptkit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Duplicate review settings.
    pub dedup: DeduplicationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Similarity section.
    pub similarity: Option<ConfigFileSimilarity>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
}

/// Similarity section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileSimilarity {
    /// Duplicate threshold in `[0, 1]`.
    pub threshold: Option<f64>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLogging {
    /// `pretty` or `json`.
    pub format: Option<LogFormat>,
    /// Filter directive.
    pub filter: Option<String>,
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if the text is not valid TOML for
    /// [`ConfigFile`], or [`Error::InvalidInput`] if a value is out of range.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;

        Self::from_config_file(file)
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Platform config file location, e.g. `~/.config/promptkit/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("promptkit").join("config.toml"))
    }

    /// Loads configuration for the CLI.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present. Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_file = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::load_from_file(&path)?,
                None => Self::default(),
            },
        };

        Ok(from_file.with_env_overrides())
    }

    /// Applies `PROMPTKIT_*` environment overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(threshold) = threshold_from_env() {
            self.dedup.threshold = threshold;
        }
        self.logging = self.logging.with_env_overrides();
        self
    }

    /// Converts a `ConfigFile` to `EngineConfig`.
    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(threshold) = file.similarity.and_then(|s| s.threshold) {
            config.dedup.threshold = validate_threshold(threshold)?;
        }
        if let Some(logging) = file.logging {
            if let Some(format) = logging.format {
                config.logging.format = format;
            }
            if let Some(filter) = logging.filter {
                config.logging.filter = filter;
            }
        }

        Ok(config)
    }
}
