//! Error types for loading and parsing scheduler logs.

use std::path::PathBuf;
use thiserror::Error;

/// A log line that could not be turned into a sample.
///
/// `line` is the 1-based line number within the parsed input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected 3 fields (tick pid queue), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {field} is not a 64-bit integer: {value:?}")]
    InvalidNumber { line: usize, field: &'static str, value: String },

    #[error("line {line}: pid {pid} outside tracked range 4..=13")]
    PidOutOfRange { line: usize, pid: i64 },
}

/// Failure while loading a log file into a `QueueLog`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read log file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
