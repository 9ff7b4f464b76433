//! Error types for convolens-dataset

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// Source file could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited-text syntax error
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV source has no header row")]
    MissingHeader,

    /// Config file exists but is not valid JSON
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for convolens-dataset
pub type Result<T> = std::result::Result<T, DatasetError>;
