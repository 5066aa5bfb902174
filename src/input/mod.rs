//! Array input parsing
//!
//! The user supplies the array as comma separated text, either typed on the
//! command line or read from a text file. [`parse`] turns that text into the
//! integer sequence consumed by the step recorder. Parsing is all-or-nothing:
//! a single bad token rejects the whole input.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors produced while turning text into an integer sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text contained no values at all (empty, or only separators)
    #[error("Please enter an input first!")]
    EmptyInput,

    /// A token was not a base-10 integer
    #[error("Invalid input '{token}': please enter numeric values only")]
    InvalidNumber { token: String },
}

/// Errors produced while loading input from a file
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parse comma separated integers.
///
/// Whitespace around each token is ignored and empty tokens (from repeated
/// separators) are skipped.
pub fn parse(text: &str) -> Result<Vec<i64>, ParseError> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    log::debug!("parsed {} values", values.len());
    Ok(values)
}

/// Read a text file and parse its (trimmed) contents
pub fn read_file(path: &Path) -> Result<Vec<i64>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(text.trim())?)
}
