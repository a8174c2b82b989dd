//! Error types for the csvprof library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for profiling operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no header to profile.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProfileError {
    /// Wrap an IO error with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProfileError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
