//! Placeholder detection.
//!
//! Finds placeholder spans of all seven recognized syntaxes in raw text.
//!
//! # Conflict Resolution
//!
//! Delimiters nest: `[[name]]` contains `[name]`, `${name}` contains `{name}`.
//! Detection therefore runs in two phases driven by [`ScanPhase`]:
//!
//! 1. Claiming rules (`[[..]]`, `{{..}}`, `${..}`) run first. Every span they
//!    match is masked out of the working copy of the text.
//! 2. Residual rules (`[..]`, `{..}`, `<..>`, `%..%`) run over the masked copy,
//!    so they can never report a span that overlaps a claimed one.
//!
//! Masking also happens between rules of the same phase. A candidate whose span
//! overlaps one already claimed is dropped, which keeps the final list free of
//! overlaps. Surviving spans are merged and sorted by start offset.
//!
//! Masked bytes are replaced with NUL, which no delimiter or name class
//! accepts. The replacement has the same byte length as the span, so offsets
//! in the masked copy are offsets into the original text. Overlaps are judged
//! by offset, never by the masked bytes, so NUL in the input is ordinary text.

use regex::Captures;

use crate::models::grammar::DETECTION_REGEXES;
use crate::models::{DetectedPlaceholder, PatternRule, ScanPhase};

/// Detects placeholders in `text`, ordered by ascending start offset.
///
/// Returns an empty list for empty text or text without placeholders.
/// Unterminated delimiters (`${name`, `[[name`) are left as literal text.
#[must_use]
pub fn detect(text: &str) -> Vec<DetectedPlaceholder> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut masked = text.to_string();
    let mut detected: Vec<DetectedPlaceholder> = Vec::new();

    for phase in [ScanPhase::Claiming, ScanPhase::Residual] {
        for (rule, regex) in DETECTION_REGEXES.iter().filter(|(r, _)| r.phase == phase) {
            let found: Vec<DetectedPlaceholder> = regex
                .captures_iter(&masked)
                .filter_map(|caps| placeholder_from_captures(rule, text, &caps))
                .filter(|candidate| !detected.iter().any(|claimed| candidate.overlaps(claimed)))
                .collect();

            for placeholder in &found {
                mask_span(&mut masked, placeholder.start, placeholder.end);
            }
            detected.extend(found);
        }
    }

    detected.sort_by_key(|p| p.start);
    tracing::trace!(count = detected.len(), "Detected placeholders");
    detected
}

/// Alias for [`detect`].
#[must_use]
pub fn detect_variables(text: &str) -> Vec<DetectedPlaceholder> {
    detect(text)
}

/// Builds a placeholder from a match against the masked copy of `text`.
///
/// Every slice is taken from `text` itself so the result never carries mask
/// bytes.
fn placeholder_from_captures(
    rule: &PatternRule,
    text: &str,
    caps: &Captures<'_>,
) -> Option<DetectedPlaceholder> {
    let whole = caps.get(0)?;
    let name = text[caps.get(1)?.range()].trim();
    if name.is_empty() {
        return None;
    }

    let placeholder = DetectedPlaceholder::new(
        &text[whole.range()],
        name,
        rule.pattern,
        whole.start(),
        whole.end(),
    );

    // The regex already consumed the separator and surrounding whitespace.
    let default = caps
        .get(2)
        .map(|m| &text[m.range()])
        .filter(|d| !d.is_empty());

    Some(match default {
        Some(default) => placeholder.with_default(default),
        None => placeholder,
    })
}

/// Overwrites `text[start..end]` with NUL bytes of equal length.
fn mask_span(text: &mut String, start: usize, end: usize) {
    text.replace_range(start..end, &"\0".repeat(end - start));
}
