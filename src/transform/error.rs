//! Transform error types.

use thiserror::Error;

/// Errors raised while converting a raw record into message lists
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Record is missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} must be an array of messages")]
    NotAnArray { field: &'static str },

    #[error("Invalid message in {field}[{index}]: {reason}")]
    InvalidMessage {
        field: &'static str,
        index: usize,
        reason: String,
    },
}

/// Result type for transform operations
pub type Result<T> = std::result::Result<T, TransformError>;
