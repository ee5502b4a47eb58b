//! Core error types for spotbgc

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for spotbgc operations
///
/// Empty inputs are never errors: an empty BLAST table or an empty FASTA file
/// are valid degenerate inputs and produce valid degenerate outputs.
#[derive(Error, Debug)]
pub enum SpotError {
    #[error("Missing input {}: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {} at line {line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for spotbgc operations
pub type SpotResult<T> = Result<T, SpotError>;

impl SpotError {
    pub fn missing_input(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SpotError::MissingInput {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn malformed(path: impl AsRef<Path>, line: usize, reason: impl Into<String>) -> Self {
        SpotError::MalformedRecord {
            path: path.as_ref().to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}
