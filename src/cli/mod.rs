//! CLI command implementations.
//!
//! This module provides the command-line interface for promptkit. Command
//! functions return their output as a `String` so the binary decides where it
//! goes.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `detect` | List placeholders in raw text |
//! | `convert` | Rewrite placeholders to `${name}` form |
//! | `variables` | List `${...}` references in canonical text |
//! | `compile` | Render canonical text with `--var name=value` values |
//! | `normalize` | Print the comparison form of a text |
//! | `similarity` | Score two texts |
//! | `fingerprint` | Print a text's fingerprint or its hash tag |
//! | `dedup` | Group near-duplicate prompts from a JSON file |
//!
//! # Example Usage
//!
//! ```bash
//! # Canonicalize a prompt
//! promptkit convert "Review [[file]] for <ISSUE>"
//!
//! # Render it
//! promptkit convert "Review [[file]] for <ISSUE>" | promptkit compile --var file=main.rs --var issue=bugs
//!
//! # Compare two prompts
//! promptkit similarity "Summarize {{text}}" "summarize [TEXT]"
//! ```

mod input;
mod similarity;
mod template;

pub use input::{TextInput, parse_var_pairs, read_file};
pub use similarity::{cmd_dedup, cmd_fingerprint, cmd_normalize, cmd_similarity};
pub use template::{OutputFormat, cmd_compile, cmd_convert, cmd_detect, cmd_variables};

use crate::{Error, Result};

/// Pretty-prints a value as JSON.
fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::OperationFailed {
        operation: "serialize_json".to_string(),
        cause: e.to_string(),
    })
}
