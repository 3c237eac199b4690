//! Canonical template variables and compile options.

use serde::{Deserialize, Serialize};

/// A `${name}` / `${name:default}` reference read out of canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Variable name exactly as written.
    pub name: String,
    /// Default value exactly as written, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl TemplateVariable {
    /// Creates a variable without a default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
        }
    }

    /// Creates a variable with a default.
    #[must_use]
    pub fn with_default(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: Some(default_value.into()),
        }
    }
}

/// Options for [`compile`](crate::services::compile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Substitute a placeholder's default when no value is supplied.
    #[serde(default = "default_use_defaults")]
    pub use_defaults: bool,
}

/// Default value for `use_defaults` (true).
const fn default_use_defaults() -> bool {
    true
}

impl CompileOptions {
    /// Options that leave placeholders without a value untouched even when
    /// they carry a default.
    #[must_use]
    pub const fn without_defaults() -> Self {
        Self {
            use_defaults: false,
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            use_defaults: default_use_defaults(),
        }
    }
}
