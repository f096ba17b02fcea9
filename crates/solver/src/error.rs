//! Result and Error types for iqtools-solver

use std::path::PathBuf;

/// Type alias for `Result<T, solver::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `iqtools-solver` crate
///
/// Every variant that points at file content carries the 1-based line number
/// so that broken output can be found quickly.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// The requested solver output file does not exist
    #[error("file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// A data line was requested after the last line of the file
    #[error("unexpected end of file at line {line}")]
    UnexpectedEndOfFile { line: usize },

    /// Fewer whitespace separated fields than the layout requires
    #[error("missing field on line {line} (column {column} requested, {found} found)")]
    MissingField {
        line: usize,
        column: usize,
        found: usize,
    },

    /// A field that could not be read as a floating point number
    #[error("failed to parse \"{token}\" as a number (line {line}, column {column})")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },
}
