//! Word-set similarity scoring.

use std::collections::HashSet;

use super::normalizer::normalize_content;

/// Default threshold for [`is_duplicate`] and [`DeduplicationConfig`].
///
/// [`DeduplicationConfig`]: super::DeduplicationConfig
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Jaccard index over the whitespace-delimited word sets of two
/// already-normalized strings.
///
/// Returns 1.0 when both are empty and 0.0 when exactly one is.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let left: HashSet<&str> = a.split_whitespace().collect();
    let right: HashSet<&str> = b.split_whitespace().collect();

    match (left.is_empty(), right.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {},
    }

    let intersection = left.intersection(&right).count();
    let union = left.len() + right.len() - intersection;
    intersection as f64 / union as f64
}

/// Symmetric similarity in `[0, 1]` between two raw texts.
///
/// Both sides are normalized with [`normalize_content`] first, so placeholder
/// syntax, case and punctuation never affect the score. Two placeholder-only
/// texts score 1.0.
///
/// # Example
///
/// ```rust
/// use promptkit::services::deduplication::calculate_similarity;
///
/// let score = calculate_similarity("Hello ${name}, how are you?", "Hello [NAME], how are you?");
/// assert!((score - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    jaccard_similarity(&normalize_content(a), &normalize_content(b))
}

/// Alias for [`calculate_similarity`].
#[must_use]
pub fn calculate(a: &str, b: &str) -> f64 {
    calculate_similarity(a, b)
}

/// Returns true when `calculate_similarity(a, b) >= threshold`.
///
/// A threshold of 0 is always satisfied; a threshold of 1 requires equal
/// normalized word sets. A NaN threshold is never satisfied.
#[must_use]
pub fn is_similar_content(a: &str, b: &str, threshold: f64) -> bool {
    calculate_similarity(a, b) >= threshold
}

/// [`is_similar_content`] at [`DEFAULT_SIMILARITY_THRESHOLD`].
#[must_use]
pub fn is_duplicate(a: &str, b: &str) -> bool {
    is_similar_content(a, b, DEFAULT_SIMILARITY_THRESHOLD)
}
