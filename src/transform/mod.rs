//! Raw-record to message-list transforms.
//!
//! A preference record carries a shared prompt plus two continuations. The
//! [`MessageTransform`] contract turns one raw record into the two full
//! conversations ("chosen" and "rejected") the tokenization stage consumes.

mod chosen_rejected;
mod error;

pub use chosen_rejected::ChosenRejectedTransform;
pub use error::{Result, TransformError};

use crate::message::Message;

/// The two conversations derived from one preference record.
///
/// Both share the same prompt prefix and diverge at the final response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceMessages {
    /// Prompt followed by the preferred continuation
    pub chosen: Vec<Message>,
    /// Prompt followed by the dispreferred continuation
    pub rejected: Vec<Message>,
}

/// Message transform trait
pub trait MessageTransform: Send + Sync {
    /// Convert one raw record into chosen/rejected message lists.
    fn transform(&self, record: &serde_json::Value) -> Result<PreferenceMessages>;
}
