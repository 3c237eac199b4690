//! # Promptkit
//!
//! Text engines for shared prompts.
//!
//! Every prompt's content passes through two engines that share one grammar of
//! what counts as a placeholder:
//!
//! - A **placeholder template engine** that recognizes seven placeholder
//!   syntaxes, rewrites them to the canonical `${name}` / `${name:default}`
//!   form, and compiles canonical text against supplied values.
//! - A **similarity engine** that normalizes content (placeholders, case and
//!   punctuation removed), scores word-set similarity, and derives
//!   fingerprints for near-duplicate detection.
//!
//! All engine functions are pure: no I/O, no shared mutable state.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use promptkit::CompileOptions;
//! use promptkit::services::{calculate_similarity, compile, convert_all_variables};
//!
//! let canonical = convert_all_variables("Dear [[First Name]], welcome to <TEAM>!");
//! assert_eq!(canonical, "Dear ${first_name}, welcome to ${team}!");
//!
//! let values = HashMap::from([("first_name".to_string(), "Ada".to_string())]);
//! let rendered = compile(&canonical, &values, CompileOptions::default());
//! assert_eq!(rendered, "Dear Ada, welcome to ${team}!");
//!
//! let score = calculate_similarity(&canonical, "dear [NAME] welcome to {{team}}");
//! assert!(score > 0.5);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;

// Re-exports for convenience
pub use config::EngineConfig;
pub use models::{CompileOptions, DetectedPlaceholder, PlaceholderPattern, TemplateVariable};
pub use services::deduplication::{DeduplicationConfig, DuplicateReviewer};

/// Error type for promptkit operations.
///
/// The engine functions are total over string input and never fail; errors
/// come from argument validation and from the configuration and CLI layers.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed `name=value` pairs, thresholds outside `[0, 1]`, unresolved variables in strict compile |
/// | `OperationFailed` | Reading input or config files fails, config parsing fails, logging init fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for promptkit operations.
pub type Result<T> = std::result::Result<T, Error>;
