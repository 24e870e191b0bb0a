//! Tokenizer boundary.
//!
//! The tokenizer itself lives outside this crate; the pipeline only needs the
//! [`MessageTokenizer`] contract: turn a message list into token ids plus a
//! per-token mask telling the label-masking stage which positions are
//! excluded from the loss. [`MockTokenizer`] is a deterministic stand-in for
//! tests and examples.

mod error;
mod mock;
mod traits;

pub use error::{Result, TokenizerError};
pub use mock::MockTokenizer;
pub use traits::{MessageTokenizer, TokenId, TokenizedMessages, CROSS_ENTROPY_IGNORE_IDX};
