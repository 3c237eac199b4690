//! Duplicate review types.

use serde::{Deserialize, Serialize};

/// Anything whose text can be compared for duplication.
pub trait PromptContent {
    /// The raw prompt text.
    fn content(&self) -> &str;
}

impl PromptContent for String {
    fn content(&self) -> &str {
        self
    }
}

impl PromptContent for &str {
    fn content(&self) -> &str {
        self
    }
}

/// A prompt identified by an opaque caller-side id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    /// Caller-side identifier.
    pub id: serde_json::Value,
    /// Prompt text.
    pub content: String,
}

impl PromptContent for PromptRecord {
    fn content(&self) -> &str {
        &self.content
    }
}

/// Why a candidate was judged a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReason {
    /// Fingerprints are identical.
    FingerprintMatch,
    /// Similarity reached the configured threshold.
    Similarity,
}

impl DuplicateReason {
    /// Returns the reason as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FingerprintMatch => "fingerprint_match",
            Self::Similarity => "similarity",
        }
    }
}

/// Result of reviewing a candidate against existing prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateCheckResult {
    /// Whether the candidate is a duplicate.
    pub is_duplicate: bool,
    /// Why, when it is.
    pub reason: Option<DuplicateReason>,
    /// Similarity to the matched prompt.
    pub similarity_score: Option<f64>,
    /// Index of the matched prompt in the slice that was reviewed.
    pub matched_index: Option<usize>,
}

impl DuplicateCheckResult {
    /// Creates a result indicating no duplicate was found.
    #[must_use]
    pub const fn not_duplicate() -> Self {
        Self {
            is_duplicate: false,
            reason: None,
            similarity_score: None,
            matched_index: None,
        }
    }

    /// Creates a result for a duplicate.
    #[must_use]
    pub const fn duplicate(reason: DuplicateReason, index: usize, score: f64) -> Self {
        Self {
            is_duplicate: true,
            reason: Some(reason),
            similarity_score: Some(score),
            matched_index: Some(index),
        }
    }
}
