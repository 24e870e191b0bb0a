//! Tokenizer error types.

use thiserror::Error;

use crate::message::Role;

/// Tokenizer errors
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Tokenizer does not handle role: {0}")]
    UnsupportedRole(Role),

    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
