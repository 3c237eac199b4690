//! Duplicate review over collections of prompts.
//!
//! Each item is normalized once up front; pairwise scores are then computed on
//! the normalized strings.

use tracing::instrument;

use super::config::DeduplicationConfig;
use super::fingerprint::FINGERPRINT_MAX_CHARS;
use super::normalizer::normalize_content;
use super::similarity::jaccard_similarity;
use super::types::{DuplicateCheckResult, DuplicateReason, PromptContent};

/// Normalizes every item's content.
fn normalize_all<T: PromptContent>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| normalize_content(item.content())).collect()
}

/// Fingerprint of an already-normalized string.
fn fingerprint_of(normalized: &str) -> &str {
    normalized
        .char_indices()
        .nth(FINGERPRINT_MAX_CHARS)
        .map_or(normalized, |(idx, _)| &normalized[..idx])
}

/// Groups similar items.
///
/// Greedy and order-dependent: each item not yet grouped seeds a group and
/// absorbs every later ungrouped item whose similarity to the seed is at least
/// `threshold`. Only groups with more than one member are returned.
#[must_use]
pub fn find_duplicates<T: PromptContent>(items: &[T], threshold: f64) -> Vec<Vec<&T>> {
    let normalized = normalize_all(items);
    let mut used = vec![false; items.len()];
    let mut groups = Vec::new();

    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut group = vec![&items[i]];

        for j in (i + 1)..items.len() {
            if !used[j] && jaccard_similarity(&normalized[i], &normalized[j]) >= threshold {
                used[j] = true;
                group.push(&items[j]);
            }
        }

        if group.len() > 1 {
            groups.push(group);
        }
    }

    groups
}

/// Keeps the first occurrence of each near-duplicate.
///
/// An item is dropped when it is similar (at least `threshold`) to any item
/// already kept.
#[must_use]
pub fn deduplicate<T: PromptContent>(items: &[T], threshold: f64) -> Vec<&T> {
    let normalized = normalize_all(items);
    let mut kept: Vec<usize> = Vec::new();

    for (i, candidate) in normalized.iter().enumerate() {
        let is_dupe = kept
            .iter()
            .any(|&k| jaccard_similarity(&normalized[k], candidate) >= threshold);
        if !is_dupe {
            kept.push(i);
        }
    }

    kept.into_iter().map(|i| &items[i]).collect()
}

/// Reviews prompts for duplication at a configured threshold.
///
/// # Example
///
/// ```rust
/// use promptkit::services::deduplication::{DeduplicationConfig, DuplicateReason, DuplicateReviewer};
///
/// let reviewer = DuplicateReviewer::new(DeduplicationConfig::default());
/// let existing = vec!["Translate ${text} into French.".to_string()];
///
/// let result = reviewer.check("translate [TEXT] into french", &existing);
/// assert!(result.is_duplicate);
/// assert_eq!(result.reason, Some(DuplicateReason::FingerprintMatch));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DuplicateReviewer {
    config: DeduplicationConfig,
}

impl DuplicateReviewer {
    /// Creates a reviewer.
    #[must_use]
    pub const fn new(config: DeduplicationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DeduplicationConfig {
        &self.config
    }

    /// Checks a candidate against existing prompts.
    ///
    /// A fingerprint collision wins outright; otherwise the most similar
    /// existing prompt is reported if it reaches the threshold. Ties go to the
    /// earliest index.
    #[instrument(skip_all, fields(existing = existing.len()))]
    pub fn check<T: PromptContent>(&self, candidate: &str, existing: &[T]) -> DuplicateCheckResult {
        let candidate_norm = normalize_content(candidate);
        let candidate_fp = fingerprint_of(&candidate_norm);
        let normalized = normalize_all(existing);

        if let Some(index) = normalized
            .iter()
            .position(|other| fingerprint_of(other) == candidate_fp)
        {
            let score = jaccard_similarity(&candidate_norm, &normalized[index]);
            return self.record(DuplicateCheckResult::duplicate(
                DuplicateReason::FingerprintMatch,
                index,
                score,
            ));
        }

        let best = normalized
            .iter()
            .enumerate()
            .map(|(index, other)| (index, jaccard_similarity(&candidate_norm, other)))
            .fold(None::<(usize, f64)>, |best, (index, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((index, score)),
            });

        let result = match best {
            Some((index, score)) if score >= self.config.threshold => {
                DuplicateCheckResult::duplicate(DuplicateReason::Similarity, index, score)
            },
            _ => DuplicateCheckResult::not_duplicate(),
        };
        self.record(result)
    }

    /// Groups similar items at the configured threshold.
    #[must_use]
    pub fn find_duplicates<'a, T: PromptContent>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        let groups = find_duplicates(items, self.config.threshold);
        tracing::debug!(items = items.len(), groups = groups.len(), "Grouped duplicates");
        groups
    }

    /// Keeps the first occurrence of each near-duplicate at the configured
    /// threshold.
    #[must_use]
    pub fn deduplicate<'a, T: PromptContent>(&self, items: &'a [T]) -> Vec<&'a T> {
        let kept = deduplicate(items, self.config.threshold);
        tracing::debug!(items = items.len(), kept = kept.len(), "Deduplicated prompts");
        kept
    }

    /// Logs and counts a review outcome.
    fn record(&self, result: DuplicateCheckResult) -> DuplicateCheckResult {
        let reason = result.reason.map_or("none", |r| r.as_str());
        if result.is_duplicate {
            tracing::info!(
                reason,
                matched_index = result.matched_index,
                score = result.similarity_score,
                threshold = self.config.threshold,
                "Duplicate prompt found"
            );
        } else {
            tracing::debug!(threshold = self.config.threshold, "No duplicate found");
        }
        metrics::counter!("promptkit_duplicate_checks_total", "reason" => reason).increment(1);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<T: PromptContent>(group: &[&T]) -> Vec<String> {
        group.iter().map(|item| item.content().to_string()).collect()
    }

    #[test]
    fn test_find_duplicates_groups() {
        let prompts = vec!["Hello World", "Hello World!", "Goodbye", "Goodbye!"];
        let groups = find_duplicates(&prompts, 0.85);
        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[0]), vec!["Hello World", "Hello World!"]);
        assert_eq!(ids(&groups[1]), vec!["Goodbye", "Goodbye!"]);
    }

    #[test]
    fn test_find_duplicates_none() {
        let prompts = vec!["Hello", "World", "Foo"];
        assert!(find_duplicates(&prompts, 0.85).is_empty());
    }

    #[test]
    fn test_find_duplicates_threshold() {
        let prompts = vec!["Hello World", "Hello Earth"];
        assert!(find_duplicates(&prompts, 0.95).is_empty());
        assert_eq!(find_duplicates(&prompts, 0.3).len(), 1);
    }

    #[test]
    fn test_deduplicate_keeps_first() {
        let prompts = vec!["Hello World", "Hello World!", "Goodbye"];
        let kept = deduplicate(&prompts, 0.85);
        assert_eq!(kept, vec![&"Hello World", &"Goodbye"]);
    }

    #[test]
    fn test_deduplicate_keeps_unique_and_empty() {
        let prompts = vec!["Hello", "World", "Foo"];
        assert_eq!(deduplicate(&prompts, 0.85).len(), 3);
        let empty: Vec<String> = Vec::new();
        assert!(deduplicate(&empty, 0.85).is_empty());
    }

    #[test]
    fn test_fingerprint_of_truncates_by_chars() {
        let long = "ü".repeat(FINGERPRINT_MAX_CHARS + 10);
        assert_eq!(fingerprint_of(&long).chars().count(), FINGERPRINT_MAX_CHARS);
        assert_eq!(fingerprint_of("short"), "short");
    }

    #[test]
    fn test_check_fingerprint_match() {
        let reviewer = DuplicateReviewer::default();
        let existing = vec!["Something else entirely", "Write a poem about ${topic}."];
        let result = reviewer.check("write a poem about <TOPIC>", &existing);
        assert_eq!(result.reason, Some(DuplicateReason::FingerprintMatch));
        assert_eq!(result.matched_index, Some(1));
    }

    #[test]
    fn test_check_similarity_picks_best() {
        let config = DeduplicationConfig::default().with_threshold(0.5).unwrap();
        let reviewer = DuplicateReviewer::new(config);
        let existing = vec![
            "write a poem",
            "write a poem about nature and trees",
            "write a poem about nature and the trees",
        ];
        let result = reviewer.check("Write a poem about nature", &existing);
        assert_eq!(result.reason, Some(DuplicateReason::Similarity));
        assert_eq!(result.matched_index, Some(1));
    }

    #[test]
    fn test_check_not_duplicate() {
        let reviewer = DuplicateReviewer::default();
        let result = reviewer.check("abc def", &["xyz uvw".to_string()]);
        assert_eq!(result, DuplicateCheckResult::not_duplicate());

        let none: [String; 0] = [];
        assert!(!reviewer.check("anything", &none).is_duplicate);
    }
}
