//! Similarity and fingerprint commands.

use super::input::read_file;
use super::to_json;
use crate::services::deduplication::{
    ContentHasher, DuplicateReviewer, PromptRecord, calculate_similarity, content_fingerprint,
    normalize_content,
};
use crate::{Error, Result};
use std::path::Path;

/// Prints the normalized form of the text.
#[must_use]
pub fn cmd_normalize(text: &str) -> String {
    normalize_content(text)
}

/// Scores two texts and reports whether they reach `threshold`.
#[must_use]
pub fn cmd_similarity(a: &str, b: &str, threshold: f64) -> String {
    let score = calculate_similarity(a, b);
    let verdict = if score >= threshold {
        "similar"
    } else {
        "distinct"
    };
    format!("{score:.4}\t{verdict} (threshold {threshold})")
}

/// Prints the fingerprint, or its hash tag when `hash` is set.
#[must_use]
pub fn cmd_fingerprint(text: &str, hash: bool) -> String {
    if hash {
        ContentHasher::content_to_tag(text)
    } else {
        content_fingerprint(text)
    }
}

/// Reads `[{id, content}, ...]` from a JSON file and prints duplicate groups.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// records.
pub fn cmd_dedup(path: &Path, reviewer: &DuplicateReviewer) -> Result<String> {
    let contents = read_file(path)?;
    let records: Vec<PromptRecord> = serde_json::from_str(&contents).map_err(|e| {
        Error::InvalidInput(format!(
            "{}: expected a JSON array of {{id, content}} records: {e}",
            path.display()
        ))
    })?;

    let groups = reviewer.find_duplicates(&records);
    to_json(&groups)
}
