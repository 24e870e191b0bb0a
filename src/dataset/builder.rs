//! Preference example builder: tokenization and label masking.

use super::example::PreferenceExample;
use crate::tokenizer::{
    MessageTokenizer, Result, TokenId, TokenizedMessages, CROSS_ENTROPY_IGNORE_IDX,
};
use crate::transform::PreferenceMessages;

/// Tokenize a preference pair and derive loss labels for both branches.
///
/// Each branch is tokenized independently end to end; the shared prompt is
/// re-tokenized in both. Because the prompt content is byte-identical across
/// branches, the tokenizer is expected to emit an identical id prefix for
/// both, and the end of that common prefix is where the masked region ends.
/// Labels copy the token id at trainable positions and hold
/// [`CROSS_ENTROPY_IGNORE_IDX`] at masked ones.
///
/// # Errors
///
/// Tokenizer failures propagate unmodified.
pub fn build_preference_example(
    messages: &PreferenceMessages,
    tokenizer: &dyn MessageTokenizer,
    train_on_input: bool,
) -> Result<PreferenceExample> {
    let chosen = tokenizer.tokenize_messages(&messages.chosen, train_on_input)?;
    let rejected = tokenizer.tokenize_messages(&messages.rejected, train_on_input)?;

    let chosen_labels = mask_labels(&chosen);
    let rejected_labels = mask_labels(&rejected);

    Ok(PreferenceExample {
        chosen_input_ids: chosen.ids,
        chosen_labels,
        rejected_input_ids: rejected.ids,
        rejected_labels,
    })
}

fn mask_labels(tokenized: &TokenizedMessages) -> Vec<TokenId> {
    debug_assert_eq!(tokenized.ids.len(), tokenized.masked.len());
    tokenized
        .ids
        .iter()
        .zip(&tokenized.masked)
        .map(|(&id, &masked)| if masked { CROSS_ENTROPY_IGNORE_IDX } else { id })
        .collect()
}

/// Length of the common token-id prefix of the two branches.
///
/// With a well-behaved tokenizer this is the tokenized prompt length. A
/// context-sensitive tokenizer (e.g. byte-pair merges across the
/// prompt/response boundary) can shorten it; callers that need the shared
/// prompt invariant should check this against the expected prompt length
/// rather than assume it.
#[must_use]
pub fn shared_prompt_prefix_len(chosen: &[TokenId], rejected: &[TokenId]) -> usize {
    chosen.iter().zip(rejected).take_while(|(c, r)| c == r).count()
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_mask_labels() {
        let tokenized = TokenizedMessages {
            ids: vec![0, 4, 2, 4, 3, 6],
            masked: vec![true, true, true, true, false, false],
        };
        assert_eq!(
            mask_labels(&tokenized),
            vec![
                CROSS_ENTROPY_IGNORE_IDX,
                CROSS_ENTROPY_IGNORE_IDX,
                CROSS_ENTROPY_IGNORE_IDX,
                CROSS_ENTROPY_IGNORE_IDX,
                3,
                6
            ]
        );
    }

    #[test]
    fn test_shared_prefix_full_divergence() {
        assert_eq!(shared_prompt_prefix_len(&[1, 2, 3], &[4, 5, 6]), 0);
    }

    #[test]
    fn test_shared_prefix_partial() {
        assert_eq!(shared_prompt_prefix_len(&[0, 4, 2, 4, 3], &[0, 4, 2, 4, 9]), 4);
    }

    #[test]
    fn test_shared_prefix_unequal_lengths() {
        assert_eq!(shared_prompt_prefix_len(&[0, 4, 2], &[0, 4, 2, 4, 9]), 3);
    }
}
