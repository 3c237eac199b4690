//! Deduplication configuration.

use super::similarity::DEFAULT_SIMILARITY_THRESHOLD;
use crate::{Error, Result};

/// Environment variable overriding the similarity threshold.
pub const THRESHOLD_ENV_VAR: &str = "PROMPTKIT_SIMILARITY_THRESHOLD";

/// Configuration for duplicate review.
///
/// # Environment Variables
///
/// | Variable | Type | Default | Description |
/// |----------|------|---------|-------------|
/// | `PROMPTKIT_SIMILARITY_THRESHOLD` | f64 | `0.85` | Minimum similarity for a duplicate |
///
/// # Example
///
/// ```rust
/// use promptkit::services::deduplication::DeduplicationConfig;
///
/// let config = DeduplicationConfig::default();
/// assert!((config.threshold - 0.85).abs() < f64::EPSILON);
/// assert!(DeduplicationConfig::default().with_threshold(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeduplicationConfig {
    /// Minimum similarity (inclusive) for two texts to count as duplicates.
    pub threshold: f64,
}

impl DeduplicationConfig {
    /// Creates a configuration from environment variables.
    ///
    /// Unset, unparsable, or out-of-range values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            threshold: threshold_from_env().unwrap_or(DEFAULT_SIMILARITY_THRESHOLD),
        }
    }

    /// Sets the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the threshold is not a finite number
    /// in `[0, 1]`.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        self.threshold = validate_threshold(threshold)?;
        Ok(self)
    }
}

impl Default for DeduplicationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Reads a valid threshold from [`THRESHOLD_ENV_VAR`], if set.
#[must_use]
pub fn threshold_from_env() -> Option<f64> {
    std::env::var(THRESHOLD_ENV_VAR)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .and_then(|v| validate_threshold(v).ok())
}

/// Checks that a threshold is a finite number in `[0, 1]`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] otherwise.
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(Error::InvalidInput(format!(
            "similarity threshold must be within [0, 1], got {threshold}"
        )))
    }
}
