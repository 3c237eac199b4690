//! Data models for promptkit.
//!
//! This module contains the placeholder grammar and the value types passed
//! between the template and comparison engines.

pub mod grammar;
mod placeholder;
mod template;

pub use grammar::{NameClass, PATTERN_RULES, PatternRule, ScanPhase, rule_for};
pub use placeholder::{DetectedPlaceholder, PlaceholderPattern};
pub use template::{CompileOptions, TemplateVariable};
