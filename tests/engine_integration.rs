//! End-to-end tests for the prompt text engines.
//!
//! Covers the authoring workflow (detect, canonicalize, extract, compile)
//! and the duplicate-review workflow (normalize, score, fingerprint, group).

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;

use promptkit::models::{CompileOptions, DetectedPlaceholder, PlaceholderPattern};
use promptkit::services::deduplication::{
    ContentHasher, DEFAULT_SIMILARITY_THRESHOLD, DeduplicationConfig, DuplicateReason,
    DuplicateReviewer, PromptRecord, deduplicate, find_duplicates, is_duplicate,
};
use promptkit::services::{
    calculate_similarity, compile, content_fingerprint, convert_all_variables,
    convert_to_supported_format, detect, extract_variables, is_similar_content, normalize,
    normalize_content, pattern_description,
};

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ============================================================================
// Placeholder template engine
// ============================================================================

#[test]
fn test_detection_order() {
    let found = detect("Hello [[name]], your age is [[age]]");
    let names: Vec<_> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["name", "age"]);
}

#[test]
fn test_false_positive_guard() {
    assert!(detect("Use <div> and <span> tags").is_empty());
    assert!(detect("As noted [see above], results vary").is_empty());
}

#[test]
fn test_name_normalization() {
    let placeholder = DetectedPlaceholder::new(
        "[[User Name]]",
        "User Name",
        PlaceholderPattern::DoubleBracket,
        0,
        13,
    );
    assert_eq!(convert_to_supported_format(&placeholder), "${user_name}");
}

#[test]
fn test_default_fallback() {
    let empty = HashMap::new();
    assert_eq!(
        compile("Hello ${name:World}", &empty, CompileOptions::default()),
        "Hello World"
    );
    assert_eq!(
        compile("Hello ${name:World}", &empty, CompileOptions::without_defaults()),
        "Hello ${name:World}"
    );
}

#[test]
fn test_authoring_workflow() {
    let authored = "Dear [[First Name]], your order {{order id}} ships via <CARRIER> \
                    on %ship date%. Contact [[support: help@example.com]].";

    let canonical = convert_all_variables(authored);
    assert_eq!(
        canonical,
        "Dear ${first_name}, your order ${order_id} ships via ${carrier} \
         on ${ship_date}. Contact ${support:help@example.com}."
    );
    assert_eq!(normalize(authored), canonical);

    let names: Vec<_> = extract_variables(&canonical)
        .into_iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(
        names,
        vec!["first_name", "order_id", "carrier", "ship_date", "support"]
    );

    let rendered = compile(
        &canonical,
        &values(&[
            ("first_name", "Ada"),
            ("order_id", "A-17"),
            ("carrier", "post"),
        ]),
        CompileOptions::default(),
    );
    assert_eq!(
        rendered,
        "Dear Ada, your order A-17 ships via post on ${ship_date}. Contact help@example.com."
    );
}

#[test]
fn test_canonical_text_renders_the_same_after_normalize() {
    let templates = [
        "[${x:}]",
        "${greeting: Hi }!",
        "Dear ${ name }, ${topic:the plan} is due ${when:}.",
    ];
    let supplied = values(&[("name", "Ada")]);
    for template in templates {
        let canonical = normalize(template);
        assert_eq!(canonical, template);
        for options in [CompileOptions::default(), CompileOptions::without_defaults()] {
            assert_eq!(
                compile(&canonical, &supplied, options),
                compile(template, &supplied, options),
                "{template}"
            );
        }
    }
    assert_eq!(
        compile(&normalize("${greeting: Hi }!"), &values(&[]), CompileOptions::default()),
        " Hi !"
    );
}

#[test]
fn test_nested_defaults_normalize_once() {
    for text in ["[[a: {{b}}]]", "${a: [[b]]}"] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "{text}");
    }
    assert_eq!(normalize("[[a: {{b}}]]"), "[[a: ${b}]]");
    assert_eq!(normalize("${a: [[b]]}"), "${a: ${b}}");
}

#[test]
fn test_compile_does_not_rescan_values() {
    let rendered = compile(
        "${a} ${b}",
        &values(&[("a", "${b}"), ("b", "done")]),
        CompileOptions::default(),
    );
    assert_eq!(rendered, "${b} done");
}

#[test]
fn test_unterminated_delimiters_are_literal() {
    for text in ["${name", "[[name", "{{name", "<NAME", "%name"] {
        assert!(detect(text).is_empty(), "{text}");
        assert_eq!(convert_all_variables(text), text);
    }
}

#[test]
fn test_pattern_descriptions() {
    let described: Vec<_> = PlaceholderPattern::all()
        .iter()
        .map(|p| pattern_description(*p))
        .collect();
    assert_eq!(
        described,
        vec!["[[...]]", "{{...}}", "[...]", "{...}", "<...>", "%...%", "${...}"]
    );
}

// ============================================================================
// Similarity and fingerprinting
// ============================================================================

#[test]
fn test_placeholder_invariance() {
    let score = calculate_similarity("Hello ${name}, how are you?", "Hello [NAME], how are you?");
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_high_and_low_similarity() {
    assert!(
        calculate_similarity("Write a poem about nature", "Write a poem about nature and trees")
            > 0.6
    );
    assert!(calculate_similarity("abc def ghi", "xyz uvw rst") < 0.1);
}

#[test]
fn test_empty_normalized_sides() {
    assert!((calculate_similarity("${a}", "[B] <C>") - 1.0).abs() < f64::EPSILON);
    assert!(calculate_similarity("${a}", "hello").abs() < f64::EPSILON);
}

#[test]
fn test_threshold_edges() {
    assert!(is_similar_content("abc", "xyz", 0.0));
    assert!(is_similar_content("Hello, World", "world hello", 1.0));
    assert!(!is_similar_content("hello world", "hello world again", 1.0));
    assert!(is_duplicate("Hello World!", "hello world"));
    assert!((DEFAULT_SIMILARITY_THRESHOLD - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_unicode_is_preserved() {
    assert_eq!(normalize_content("Café NAÏVE, straße!"), "café naïve straße");
}

#[test]
fn test_fingerprint_truncates() {
    let text = "word ".repeat(200);
    let fingerprint = content_fingerprint(&text);
    assert_eq!(fingerprint.chars().count(), 500);
    assert!(normalize_content(&text).starts_with(&fingerprint));
    assert_eq!(content_fingerprint("Short, ${x}!"), "short");
}

#[test]
fn test_hash_tags_match_for_equivalent_prompts() {
    assert_eq!(
        ContentHasher::content_to_tag("Summarize ${text}."),
        ContentHasher::content_to_tag("summarize <TEXT>")
    );
    assert_ne!(
        ContentHasher::content_to_tag("Summarize ${text}."),
        ContentHasher::content_to_tag("Translate ${text}.")
    );
}

// ============================================================================
// Duplicate review
// ============================================================================

#[test]
fn test_review_workflow() {
    let library = vec![
        PromptRecord {
            id: serde_json::json!("p1"),
            content: "Review ${file} for security issues.".to_string(),
        },
        PromptRecord {
            id: serde_json::json!("p2"),
            content: "Write release notes for ${version}.".to_string(),
        },
    ];

    let reviewer = DuplicateReviewer::default();
    let candidate = convert_all_variables("Review [[file]] for security issues");
    let result = reviewer.check(&candidate, &library);
    assert!(result.is_duplicate);
    assert_eq!(result.reason, Some(DuplicateReason::FingerprintMatch));
    assert_eq!(result.matched_index, Some(0));

    let unrelated = reviewer.check("Plan a team offsite agenda", &library);
    assert!(!unrelated.is_duplicate);
}

#[test]
fn test_grouping_and_deduplication_agree_on_first_occurrence() {
    let prompts = vec![
        "Explain ${concept} simply.",
        "Draft an email to ${recipient}.",
        "explain <CONCEPT> simply!",
        "Draft an email to [RECIPIENT]",
        "Something unrelated entirely",
    ];

    let groups = find_duplicates(&prompts, 0.85);
    assert_eq!(groups.len(), 2);
    assert_eq!(*groups[0][0], prompts[0]);
    assert_eq!(*groups[1][0], prompts[1]);

    let kept = deduplicate(&prompts, 0.85);
    assert_eq!(kept, vec![&prompts[0], &prompts[1], &prompts[4]]);

    let reviewer = DuplicateReviewer::new(DeduplicationConfig::default());
    assert_eq!(reviewer.deduplicate(&prompts), kept);
}
