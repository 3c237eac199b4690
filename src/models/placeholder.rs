//! Placeholder pattern tags and detection results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of placeholder syntaxes recognized in prompt text.
///
/// Only [`PlaceholderPattern::DollarCurly`] is persisted; every other syntax is an
/// authoring-time convenience converted away before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderPattern {
    /// `[[name]]` or `[[name: default]]`.
    DoubleBracket,
    /// `{{name}}`.
    DoubleCurly,
    /// `[NAME]`.
    SingleBracket,
    /// `{NAME}` or `{name}`.
    SingleCurly,
    /// `<NAME>`.
    AngleBracket,
    /// `%name%`.
    Percent,
    /// `${name}` or `${name:default}`, the canonical form.
    DollarCurly,
}

impl PlaceholderPattern {
    /// Returns all pattern variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DoubleBracket,
            Self::DoubleCurly,
            Self::SingleBracket,
            Self::SingleCurly,
            Self::AngleBracket,
            Self::Percent,
            Self::DollarCurly,
        ]
    }

    /// Returns the pattern tag as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DoubleBracket => "double_bracket",
            Self::DoubleCurly => "double_curly",
            Self::SingleBracket => "single_bracket",
            Self::SingleCurly => "single_curly",
            Self::AngleBracket => "angle_bracket",
            Self::Percent => "percent",
            Self::DollarCurly => "dollar_curly",
        }
    }

    /// Returns a short human-readable description of the delimiter shape.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::DoubleBracket => "[[...]]",
            Self::DoubleCurly => "{{...}}",
            Self::SingleBracket => "[...]",
            Self::SingleCurly => "{...}",
            Self::AngleBracket => "<...>",
            Self::Percent => "%...%",
            Self::DollarCurly => "${...}",
        }
    }

    /// Returns true for the canonical (persisted) syntax.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::DollarCurly)
    }
}

impl fmt::Display for PlaceholderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A placeholder found in raw prompt text.
///
/// Offsets are byte positions into the source text and form a half-open span,
/// so `&text[start..end] == original`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPlaceholder {
    /// The matched substring, delimiters included.
    pub original: String,
    /// Raw name with surrounding whitespace trimmed.
    pub name: String,
    /// Default value, when the syntax supports one and it is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Which syntax matched.
    pub pattern: PlaceholderPattern,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl DetectedPlaceholder {
    /// Creates a placeholder with no default value.
    #[must_use]
    pub fn new(
        original: impl Into<String>,
        name: impl Into<String>,
        pattern: PlaceholderPattern,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            original: original.into(),
            name: name.into(),
            default_value: None,
            pattern,
            start,
            end,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Returns true if the two spans share at least one byte.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
