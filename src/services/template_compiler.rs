//! Variable extraction and substitution for canonical text.
//!
//! Canonical text carries only `${name}` and `${name:default}` placeholders.
//! Names and defaults are read verbatim; canonical text is assumed to be
//! normalized already.

use std::collections::HashMap;
use std::hash::BuildHasher;

use regex::Captures;

use crate::models::grammar::CANONICAL_REFERENCE;
use crate::models::{CompileOptions, TemplateVariable};
use crate::{Error, Result};

/// Builds a variable from a canonical-reference match.
fn variable_from_captures(caps: &Captures<'_>) -> Option<TemplateVariable> {
    let name = caps.get(1)?.as_str();
    Some(TemplateVariable {
        name: name.to_string(),
        default_value: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

/// Extracts `${name}` / `${name:default}` references in source order.
///
/// Repeated names produce one entry per occurrence. Callers that want a unique
/// list de-duplicate themselves.
#[must_use]
pub fn extract_variables(canonical: &str) -> Vec<TemplateVariable> {
    CANONICAL_REFERENCE
        .captures_iter(canonical)
        .filter_map(|caps| variable_from_captures(&caps))
        .collect()
}

/// Resolves the replacement for one reference, or `None` to leave it as-is.
fn resolve<'a, S: BuildHasher>(
    caps: &'a Captures<'_>,
    values: &'a HashMap<String, String, S>,
    options: CompileOptions,
) -> Option<&'a str> {
    let name = caps.get(1)?.as_str();
    if let Some(value) = values.get(name) {
        return Some(value.as_str());
    }
    if options.use_defaults {
        return caps.get(2).map(|m| m.as_str());
    }
    None
}

/// Substitutes values into canonical text.
///
/// For each reference: the supplied value if present, else the default when
/// `options.use_defaults` is set and a default exists, else the original
/// placeholder text. Substitution is single-pass; inserted values are never
/// re-scanned.
#[must_use]
pub fn compile<S: BuildHasher>(
    canonical: &str,
    values: &HashMap<String, String, S>,
    options: CompileOptions,
) -> String {
    CANONICAL_REFERENCE
        .replace_all(canonical, |caps: &Captures<'_>| {
            resolve(caps, values, options).map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Returns references that [`compile`] would leave unresolved, one entry per
/// occurrence.
#[must_use]
pub fn unresolved_variables<S: BuildHasher>(
    canonical: &str,
    values: &HashMap<String, String, S>,
    options: CompileOptions,
) -> Vec<TemplateVariable> {
    CANONICAL_REFERENCE
        .captures_iter(canonical)
        .filter(|caps| resolve(caps, values, options).is_none())
        .filter_map(|caps| variable_from_captures(&caps))
        .collect()
}

/// Like [`compile`], but fails when any reference stays unresolved.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] naming the first unresolved variable.
pub fn compile_strict<S: BuildHasher>(
    canonical: &str,
    values: &HashMap<String, String, S>,
    options: CompileOptions,
) -> Result<String> {
    if let Some(missing) = unresolved_variables(canonical, values, options).first() {
        return Err(Error::InvalidInput(format!(
            "Missing value for variable '{}'. Provide it with: --var {}=VALUE",
            missing.name, missing.name
        )));
    }
    Ok(compile(canonical, values, options))
}
