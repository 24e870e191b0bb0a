//! Tokenizer trait definition.

use super::error::Result;
use crate::message::Message;

/// Token ID type.
///
/// Signed so that sentinel values (the ignore label, negative special ids
/// some tokenizers emit) are representable alongside vocabulary ids.
pub type TokenId = i64;

/// Label sentinel marking a position as excluded from the loss.
pub const CROSS_ENTROPY_IGNORE_IDX: TokenId = -100;

/// Token ids for a message list, with a parallel loss-exclusion mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedMessages {
    /// Token ids, one conversation end to end
    pub ids: Vec<TokenId>,
    /// `masked[i]` means position `i` must not contribute to the loss
    pub masked: Vec<bool>,
}

impl TokenizedMessages {
    /// Number of token positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Message-level tokenizer trait
pub trait MessageTokenizer: Send + Sync {
    /// Tokenize a full message list into ids plus a loss-exclusion mask.
    ///
    /// A position is masked when its message carries `masked=true` and
    /// `train_on_input` is false; `train_on_input=true` lifts the masking of
    /// prompt messages so the model also trains on the input.
    ///
    /// Special tokens dictated by the tokenizer's configuration (BOS/EOS and
    /// the like) are emitted even for empty message content; no trimming
    /// happens at this boundary.
    fn tokenize_messages(
        &self,
        messages: &[Message],
        train_on_input: bool,
    ) -> Result<TokenizedMessages>;
}
