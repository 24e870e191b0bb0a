//! Deterministic word-length tokenizer for tests and examples.

use super::error::Result;
use super::traits::{MessageTokenizer, TokenId, TokenizedMessages};
use crate::message::Message;

/// Maps every whitespace-separated word to its character count.
///
/// Emits BOS at the start of the conversation and EOS at the end, inheriting
/// the mask of the first and last message respectively. Deterministic and
/// vocabulary-free, which makes expected token sequences trivial to write by
/// hand; the label-masking pipeline is exercised exactly as with a real
/// tokenizer.
#[derive(Debug, Clone)]
pub struct MockTokenizer {
    bos: TokenId,
    eos: TokenId,
}

impl MockTokenizer {
    /// Create a mock tokenizer with the given BOS/EOS ids.
    #[must_use]
    pub fn new(bos: TokenId, eos: TokenId) -> Self {
        Self { bos, eos }
    }
}

impl Default for MockTokenizer {
    fn default() -> Self {
        Self::new(0, -1)
    }
}

impl MessageTokenizer for MockTokenizer {
    fn tokenize_messages(
        &self,
        messages: &[Message],
        train_on_input: bool,
    ) -> Result<TokenizedMessages> {
        let mut ids = Vec::new();
        let mut masked = Vec::new();

        for (i, message) in messages.iter().enumerate() {
            let mask = message.masked && !train_on_input;

            if i == 0 {
                ids.push(self.bos);
                masked.push(mask);
            }

            for word in message.content.split_whitespace() {
                ids.push(word.len() as TokenId);
                masked.push(mask);
            }

            if i == messages.len() - 1 {
                ids.push(self.eos);
                masked.push(mask);
            }
        }

        Ok(TokenizedMessages { ids, masked })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lengths_with_bos_eos() {
        let messages = vec![Message::user("What is 2+2?"), Message::assistant("The answer is 4.")];
        let out = MockTokenizer::default().tokenize_messages(&messages, false).unwrap();
        assert_eq!(out.ids, vec![0, 4, 2, 4, 3, 6, 2, 2, -1]);
        assert_eq!(
            out.masked,
            vec![true, true, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_train_on_input_unmasks_prompt() {
        let messages = vec![Message::user("What is 2+2?"), Message::assistant("The answer is 4.")];
        let out = MockTokenizer::default().tokenize_messages(&messages, true).unwrap();
        assert!(out.masked.iter().all(|&m| !m));
    }

    #[test]
    fn test_empty_content_still_emits_special_tokens() {
        let messages = vec![Message::user(""), Message::assistant("")];
        let out = MockTokenizer::default().tokenize_messages(&messages, false).unwrap();
        assert_eq!(out.ids, vec![0, -1]);
        assert_eq!(out.masked, vec![true, false]);
    }

    #[test]
    fn test_no_messages_no_tokens() {
        let out = MockTokenizer::default().tokenize_messages(&[], false).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_custom_special_ids() {
        let messages = vec![Message::assistant("hi")];
        let out = MockTokenizer::new(7, 8).tokenize_messages(&messages, false).unwrap();
        assert_eq!(out.ids, vec![7, 2, 8]);
    }
}
