//! Input helpers shared by the text commands.

use crate::{Error, Result};
use clap::Args;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a command reads its text from.
///
/// A literal argument wins, `-` (or nothing) means stdin, and `--file` reads a
/// UTF-8 file.
#[derive(Debug, Clone, Default, Args)]
pub struct TextInput {
    /// Text to process. Use `-` or omit to read stdin.
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl TextInput {
    /// Creates an input from a literal string.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file: None,
        }
    }

    /// Creates an input that reads a file.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            text: None,
            file: Some(path.into()),
        }
    }

    /// Resolves the input to its text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        if let Some(path) = &self.file {
            return read_file(path);
        }
        match self.text.as_deref() {
            Some("-") | None => read_stdin(),
            Some(text) => Ok(text.to_string()),
        }
    }
}

/// Reads a whole file as UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
        operation: "read_file".to_string(),
        cause: format!("{}: {e}", path.display()),
    })
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::OperationFailed {
            operation: "read_stdin".to_string(),
            cause: e.to_string(),
        })?;
    Ok(buffer)
}

/// Parses `name=value` pairs into a value map.
///
/// Later pairs overwrite earlier ones. Only the first `=` splits, so values
/// may contain `=`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a pair without `=` or with an empty
/// name.
pub fn parse_var_pairs(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut values = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| Error::InvalidInput(format!("expected name=value, got '{pair}'")))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput(format!(
                "variable name is empty in '{pair}'"
            )));
        }
        values.insert(name.to_string(), value.to_string());
    }
    Ok(values)
}
