//! Placeholder template commands.
//!
//! Each command renders its output to a `String`; the binary prints it.

use super::to_json;
use crate::Result;
use crate::models::{CompileOptions, DetectedPlaceholder};
use crate::services::{
    compile, compile_strict, convert_all_variables, detect, extract_variables,
    unresolved_variables,
};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per item.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Selects JSON when the flag is set.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

fn format_placeholder(placeholder: &DetectedPlaceholder) -> String {
    let mut line = format!(
        "{}..{}\t{}\t{}",
        placeholder.start, placeholder.end, placeholder.pattern, placeholder.name
    );
    if let Some(default) = &placeholder.default_value {
        let _ = write!(line, "\tdefault={default}");
    }
    line
}

/// Lists the placeholders found in raw text.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn cmd_detect(text: &str, format: OutputFormat) -> Result<String> {
    let placeholders = detect(text);
    match format {
        OutputFormat::Json => to_json(&placeholders),
        OutputFormat::Text => Ok(placeholders
            .iter()
            .map(format_placeholder)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Rewrites every placeholder to canonical form.
#[must_use]
pub fn cmd_convert(text: &str) -> String {
    convert_all_variables(text)
}

/// Lists `${...}` references in canonical text, one per occurrence.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn cmd_variables(canonical: &str, format: OutputFormat) -> Result<String> {
    let variables = extract_variables(canonical);
    match format {
        OutputFormat::Json => to_json(&variables),
        OutputFormat::Text => Ok(variables
            .iter()
            .map(|v| match &v.default_value {
                Some(default) => format!("{}\tdefault={default}", v.name),
                None => v.name.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Renders canonical text against supplied values.
///
/// Unresolved references are logged, or rejected when `strict` is set.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] in strict mode when a reference has no
/// value.
pub fn cmd_compile(
    canonical: &str,
    values: &HashMap<String, String>,
    options: CompileOptions,
    strict: bool,
) -> Result<String> {
    if strict {
        return compile_strict(canonical, values, options);
    }

    let unresolved = unresolved_variables(canonical, values, options);
    if !unresolved.is_empty() {
        let names: Vec<_> = unresolved.iter().map(|v| v.name.as_str()).collect();
        tracing::warn!(unresolved = ?names, "Template has unresolved variables");
    }
    Ok(compile(canonical, values, options))
}
