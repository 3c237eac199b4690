//! Content similarity and fingerprinting.
//!
//! This module answers "is this prompt a near-duplicate of one we already
//! have?" with three primitives layered on one normalizer:
//!
//! 1. **Normalization**: placeholder spans, case and punctuation removed
//! 2. **Similarity**: Jaccard index over normalized word sets
//! 3. **Fingerprint**: normalized content truncated to 500 characters
//!
//! ```text
//! raw text ──► normalize_content ──┬──► calculate_similarity ──► is_similar_content
//!                                  └──► content_fingerprint ──► ContentHasher
//! ```
//!
//! Threshold choice and what happens on a match belong to the caller.
//! [`DuplicateReviewer`] bundles a threshold with the grouping helpers for
//! callers that want one.
//!
//! # Example
//!
//! ```rust
//! use promptkit::services::deduplication::{content_fingerprint, is_similar_content};
//!
//! assert!(is_similar_content("Hello, ${name}!", "hello [NAME]", 1.0));
//! assert_eq!(content_fingerprint("Hello, World!"), "hello world");
//! ```

mod config;
mod fingerprint;
mod hasher;
mod normalizer;
mod service;
mod similarity;
mod types;

pub use config::{
    DeduplicationConfig, THRESHOLD_ENV_VAR, threshold_from_env, validate_threshold,
};
pub use fingerprint::{FINGERPRINT_MAX_CHARS, content_fingerprint};
pub use hasher::ContentHasher;
pub use normalizer::normalize_content;
pub use service::{DuplicateReviewer, deduplicate, find_duplicates};
pub use similarity::{
    DEFAULT_SIMILARITY_THRESHOLD, calculate, calculate_similarity, is_duplicate,
    is_similar_content, jaccard_similarity,
};
pub use types::{DuplicateCheckResult, DuplicateReason, PromptContent, PromptRecord};
