//! Conversion of authoring syntaxes to the canonical `${name}` form.

use crate::models::grammar::CANONICAL_REFERENCE;
use crate::models::{DetectedPlaceholder, PlaceholderPattern};

use super::scanner::detect;

/// Normalizes a raw placeholder name for the canonical form.
///
/// Lowercases, trims, and collapses each internal whitespace run to a single
/// underscore: `"User  Name"` becomes `"user_name"`.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a detected placeholder to `${name}` or `${name:default}`.
///
/// A `${..}` placeholder is already canonical: only its name is rewritten, and
/// its default is kept exactly as written, empty or padded. When the name is
/// already canonical the original text is returned unchanged.
#[must_use]
pub fn convert_to_supported_format(placeholder: &DetectedPlaceholder) -> String {
    let name = canonical_name(&placeholder.name);
    if placeholder.pattern == PlaceholderPattern::DollarCurly {
        if name == placeholder.name {
            return placeholder.original.clone();
        }
        if let Some(caps) = CANONICAL_REFERENCE.captures(&placeholder.original) {
            return match caps.get(2) {
                Some(default) => format!("${{{name}:{}}}", default.as_str()),
                None => format!("${{{name}}}"),
            };
        }
    }

    match placeholder.default_value.as_deref() {
        Some(default) if !default.is_empty() => format!("${{{name}:{default}}}"),
        _ => format!("${{{name}}}"),
    }
}

/// Rewrites every detected placeholder in `text` to canonical form.
///
/// Non-placeholder text passes through unchanged. Text without placeholders
/// is returned as-is.
#[must_use]
pub fn convert_all_variables(text: &str) -> String {
    let detected = detect(text);
    if detected.is_empty() {
        return text.to_string();
    }

    // Spans are sorted and disjoint, so a single forward pass suffices.
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for placeholder in &detected {
        result.push_str(&text[cursor..placeholder.start]);
        result.push_str(&convert_to_supported_format(placeholder));
        cursor = placeholder.end;
    }
    result.push_str(&text[cursor..]);

    tracing::debug!(converted = detected.len(), "Canonicalized placeholders");
    result
}

/// Alias for [`convert_all_variables`].
#[must_use]
pub fn normalize(text: &str) -> String {
    convert_all_variables(text)
}

/// Returns the delimiter description for a pattern, e.g. `"[[...]]"`.
#[must_use]
pub const fn pattern_description(pattern: PlaceholderPattern) -> &'static str {
    pattern.description()
}
