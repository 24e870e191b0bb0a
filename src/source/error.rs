//! Source loading error types.

use thiserror::Error;

/// Errors raised while loading raw records
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unknown source: {name} (only \"json\" is handled locally)")]
    UnknownSource { name: String },

    #[error("Source \"json\" requires data_files to be set")]
    MissingDataFiles,

    #[error("Invalid JSONL at line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for source operations
pub type Result<T> = std::result::Result<T, SourceError>;
