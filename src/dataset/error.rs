//! Dataset error types.

use thiserror::Error;

use crate::source::SourceError;
use crate::tokenizer::TokenizerError;
use crate::transform::TransformError;

/// Errors raised by preference dataset construction and access
///
/// Collaborator failures pass through transparently so the training loop
/// sees the original message verbatim.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Packing concatenates independent sequences into fixed-width blocks,
    /// which would destroy the per-pair prompt/response alignment the label
    /// masking depends on. Permanent constraint, not a missing feature.
    #[error("Packed is currently not supported for preference datasets.")]
    PackingUnsupported,

    #[error("Index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
