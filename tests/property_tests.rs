//! Property-based tests for the placeholder and similarity engines.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Detection returns sorted, non-overlapping spans that slice the input
//! - Canonicalization is idempotent and keeps canonical text renderable as-is
//! - Similarity is symmetric and bounded
//! - Normalization is idempotent
//! - Fingerprints are bounded prefixes of the normalized text

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;

use proptest::prelude::*;
use promptkit::models::CompileOptions;
use promptkit::services::deduplication::FINGERPRINT_MAX_CHARS;
use promptkit::services::{
    calculate_similarity, compile, content_fingerprint, convert_all_variables, detect,
    normalize_content,
};

/// Prompt-like fragments mixing every placeholder syntax with prose that
/// only looks like one.
const FRAGMENTS: &[&str] = &[
    "Hello",
    "world,",
    "please",
    "review",
    "the",
    "[[user name]]",
    "[[tone: friendly]]",
    "{{file}}",
    "[NAME]",
    "{Topic}",
    "{count}",
    "<TEAM>",
    "%task%",
    "${ready}",
    "${Some Thing:x}",
    "${greeting: Hi }",
    "${empty:}",
    "[[a: {{b}}]]",
    "${a: [[b]]}",
    "<div>",
    "[see above]",
    "${unterminated",
    "{{",
    "]]",
    "Café",
    "naïve!",
];

fn prompt_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..12).prop_map(|parts| parts.join(" "))
}

proptest! {
    /// Property: detected spans are sorted, disjoint, and slice the input.
    #[test]
    fn prop_detect_spans_are_sorted_disjoint_slices(text in any::<String>()) {
        let found = detect(&text);
        for placeholder in &found {
            prop_assert!(placeholder.start < placeholder.end);
            prop_assert_eq!(&text[placeholder.start..placeholder.end], placeholder.original.as_str());
        }
        for pair in found.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
            prop_assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    /// Property: detection never panics on prompt-like text and never
    /// reports empty names.
    #[test]
    fn prop_detect_names_are_non_empty(text in prompt_text()) {
        for placeholder in detect(&text) {
            prop_assert!(!placeholder.name.trim().is_empty());
        }
    }

    /// Property: canonicalizing twice equals canonicalizing once.
    #[test]
    fn prop_convert_is_idempotent(text in prompt_text()) {
        let once = convert_all_variables(&text);
        let twice = convert_all_variables(&once);
        prop_assert_eq!(twice, once);
    }

    /// Property: canonicalizing never changes what a template renders to.
    #[test]
    fn prop_convert_preserves_rendering_of_canonical_text(text in prompt_text()) {
        let canonical = convert_all_variables(&text);
        let empty: HashMap<String, String> = HashMap::new();
        prop_assert_eq!(
            compile(&convert_all_variables(&canonical), &empty, CompileOptions::default()),
            compile(&canonical, &empty, CompileOptions::default())
        );
    }

    /// Property: canonical output contains only canonical placeholders.
    #[test]
    fn prop_convert_output_is_canonical(text in prompt_text()) {
        let converted = convert_all_variables(&text);
        for placeholder in detect(&converted) {
            prop_assert!(placeholder.pattern.is_canonical(), "{:?}", placeholder);
        }
    }

    /// Property: similarity is symmetric.
    #[test]
    fn prop_similarity_is_symmetric(a in ".{0,80}", b in ".{0,80}") {
        prop_assert_eq!(calculate_similarity(&a, &b), calculate_similarity(&b, &a));
    }

    /// Property: similarity stays within [0, 1].
    #[test]
    fn prop_similarity_is_bounded(a in prompt_text(), b in prompt_text()) {
        let score = calculate_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: every text is fully similar to itself.
    #[test]
    fn prop_self_similarity_is_one(a in ".{0,80}") {
        prop_assert!((calculate_similarity(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    /// Property: similarity ignores placeholder syntax after canonicalization.
    #[test]
    fn prop_canonicalization_preserves_similarity_to_source(text in prompt_text()) {
        let canonical = convert_all_variables(&text);
        let score = calculate_similarity(&canonical, &canonical);
        prop_assert!((score - 1.0).abs() < f64::EPSILON);
    }

    /// Property: normalization is idempotent.
    #[test]
    fn prop_normalize_content_is_idempotent(text in "[a-zA-Z0-9 ,.!?\\[\\]<>${}:_%-]{0,120}") {
        let once = normalize_content(&text);
        prop_assert_eq!(normalize_content(&once), once.clone());
    }

    /// Property: fingerprint length is min(500, normalized length) in chars.
    #[test]
    fn prop_fingerprint_length(text in ".{0,700}") {
        let normalized = normalize_content(&text);
        let fingerprint = content_fingerprint(&text);
        prop_assert_eq!(
            fingerprint.chars().count(),
            normalized.chars().count().min(FINGERPRINT_MAX_CHARS)
        );
        prop_assert!(normalized.starts_with(&fingerprint));
    }
}
