//! Content fingerprints for coarse duplicate lookup.

use super::normalizer::normalize_content;

/// Maximum fingerprint length, in characters.
pub const FINGERPRINT_MAX_CHARS: usize = 500;

/// Returns the normalized content truncated to [`FINGERPRINT_MAX_CHARS`]
/// characters.
///
/// Truncation counts characters, not bytes, and ignores word boundaries. The
/// result is a collision-tolerant lookup key, not a digest: distinct texts
/// sharing a long normalized prefix share a fingerprint.
#[must_use]
pub fn content_fingerprint(content: &str) -> String {
    normalize_content(content)
        .chars()
        .take(FINGERPRINT_MAX_CHARS)
        .collect()
}
