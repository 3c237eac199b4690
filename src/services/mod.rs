//! Text engines.
//!
//! Two engines share one placeholder grammar ([`crate::models::grammar`]):
//!
//! - **Template engine**: [`detect`] finds placeholders in any of seven
//!   syntaxes, [`convert_all_variables`] rewrites them to canonical `${name}`
//!   form, and [`compile`] fills canonical text with values.
//! - **Similarity engine** ([`deduplication`]): placeholder-aware
//!   normalization, word-set similarity and fingerprints.
//!
//! Every function here is pure and synchronous, and safe to call from any
//! number of threads at once.

mod canonicalizer;
pub mod deduplication;
mod scanner;
mod template_compiler;

pub use canonicalizer::{
    canonical_name, convert_all_variables, convert_to_supported_format, normalize,
    pattern_description,
};
pub use deduplication::{
    calculate_similarity, content_fingerprint, is_similar_content, normalize_content,
};
pub use scanner::{detect, detect_variables};
pub use template_compiler::{compile, compile_strict, extract_variables, unresolved_variables};
