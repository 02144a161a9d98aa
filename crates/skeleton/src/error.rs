//! Error types for the skeleton crate.

use thiserror::Error;

/// Errors that can occur while transforming a sample-skeleton file.
///
/// Malformed records never show up here: the transform skips them and keeps
/// going. Only fatal I/O conditions abort a run, and the two file-boundary
/// variants carry the offending path so the diagnostic names the file.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Input file could not be opened
    #[error("failed to open input file {path}: {source}")]
    InputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created
    #[error("failed to create output file {path}: {source}")]
    OutputCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while streaming records
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PrepError>;
