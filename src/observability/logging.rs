//! Structured logging configuration.

use serde::Deserialize;

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV_VAR: &str = "PROMPTKIT_LOG_FORMAT";

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV_VAR: &str = "PROMPTKIT_LOG_FILTER";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name. Unknown names fall back to [`LogFormat::Pretty`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `tracing-subscriber` filter directive, e.g. `promptkit=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Applies `PROMPTKIT_LOG_FORMAT` and `PROMPTKIT_LOG_FILTER` overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(format) = std::env::var(LOG_FORMAT_ENV_VAR) {
            self.format = LogFormat::parse(&format);
        }
        if let Ok(filter) = std::env::var(LOG_FILTER_ENV_VAR)
            && !filter.trim().is_empty()
        {
            self.filter = filter;
        }
        self
    }

    /// Raises the filter to `debug` for this crate when verbose output is
    /// requested.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.filter = format!("{},promptkit=debug", self.filter);
        }
        self
    }
}
