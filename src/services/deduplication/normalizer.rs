//! Comparison-ready content normalization.
//!
//! Placeholder stripping here is deliberately more permissive than detection:
//! any `[...]` or `<...>` span is removed regardless of case, alongside every
//! canonical `${...}` reference. An incidental HTML-tag-shaped span carries
//! no similarity signal either way.

use crate::models::grammar::COMPARISON_STRIPS;

/// Normalizes content for similarity comparison and fingerprinting.
///
/// Steps, in order:
/// 1. Remove `${...}`, `[...]` and `<...>` spans
/// 2. Lowercase
/// 3. Drop everything except letters, digits and whitespace (Unicode-aware)
/// 4. Collapse whitespace runs to one space and trim
///
/// # Example
///
/// ```rust
/// use promptkit::services::deduplication::normalize_content;
///
/// assert_eq!(normalize_content("Hello, ${name}! See [NOTE]."), "hello see");
/// ```
#[must_use]
pub fn normalize_content(content: &str) -> String {
    let mut stripped = content.to_string();
    for regex in COMPARISON_STRIPS.iter() {
        stripped = regex.replace_all(&stripped, "").into_owned();
    }

    stripped
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
