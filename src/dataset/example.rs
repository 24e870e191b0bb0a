//! Preference example types.

use crate::tokenizer::TokenId;

/// One tokenized preference pair.
///
/// Four parallel sequences: ids and labels for each branch. Labels equal the
/// token id at trainable positions and
/// [`CROSS_ENTROPY_IGNORE_IDX`](crate::tokenizer::CROSS_ENTROPY_IGNORE_IDX)
/// at masked (prompt) positions. `chosen_input_ids` and `chosen_labels`
/// always have equal length; same for the rejected branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceExample {
    /// Token ids of the chosen conversation
    pub chosen_input_ids: Vec<TokenId>,
    /// Loss labels for the chosen conversation
    pub chosen_labels: Vec<TokenId>,
    /// Token ids of the rejected conversation
    pub rejected_input_ids: Vec<TokenId>,
    /// Loss labels for the rejected conversation
    pub rejected_labels: Vec<TokenId>,
}

impl PreferenceExample {
    /// Sequence length of the chosen branch.
    #[must_use]
    pub fn chosen_len(&self) -> usize {
        self.chosen_input_ids.len()
    }

    /// Sequence length of the rejected branch.
    #[must_use]
    pub fn rejected_len(&self) -> usize {
        self.rejected_input_ids.len()
    }
}

/// Reference policy log-probabilities for one preference pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLogProbs {
    /// Log-probability of the chosen response under the reference policy
    pub chosen: f32,
    /// Log-probability of the rejected response under the reference policy
    pub rejected: f32,
}

/// A preference example with its optional reference-logprob overlay.
///
/// `reference` is `None` until reference log-probabilities are attached to
/// the wrapping [`ReferenceLogProbDataset`](super::ReferenceLogProbDataset);
/// the two scalars are only ever present together.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedExample {
    /// The tokenized pair
    pub example: PreferenceExample,
    /// Reference log-probabilities, if attached
    pub reference: Option<ReferenceLogProbs>,
}
