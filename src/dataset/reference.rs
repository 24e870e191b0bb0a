//! Reference log-probability overlay.

use ndarray::Array1;

use super::error::{DatasetError, Result};
use super::example::{AugmentedExample, ReferenceLogProbs};
use super::indexable::ExampleSource;

/// Attachment state: nothing yet, or one scalar per example per branch.
enum ReferenceState {
    Unattached,
    Attached { chosen: Array1<f32>, rejected: Array1<f32> },
}

/// Wraps an [`ExampleSource`] and overlays precomputed reference
/// log-probabilities onto its examples.
///
/// The wrapper owns the base dataset but copies nothing out of it; all
/// example construction is delegated per access. Until
/// [`attach_reference_log_probs`](Self::attach_reference_log_probs) is
/// called, `get` yields the base example with no reference payload.
pub struct ReferenceLogProbDataset<D: ExampleSource> {
    base: D,
    state: ReferenceState,
}

impl<D: ExampleSource> ReferenceLogProbDataset<D> {
    /// Wrap a base dataset in the unattached state.
    #[must_use]
    pub fn new(base: D) -> Self {
        Self { base, state: ReferenceState::Unattached }
    }

    /// Number of examples; always the base dataset's length, regardless of
    /// attachment state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Whether reference log-probabilities are currently attached.
    #[must_use]
    pub fn has_reference_log_probs(&self) -> bool {
        matches!(self.state, ReferenceState::Attached { .. })
    }

    /// Access the wrapped dataset.
    #[must_use]
    pub fn base(&self) -> &D {
        &self.base
    }

    /// Attach one reference log-probability per example per branch.
    ///
    /// Replaces any previously attached tensors wholesale. Lengths are the
    /// caller's responsibility and are not validated here: a tensor shorter
    /// than the dataset surfaces as an index error on `get` for the indices
    /// it does not cover. Taking `&mut self` means attachment cannot race a
    /// concurrent `get`; keep it that way if interior mutability is ever
    /// introduced.
    pub fn attach_reference_log_probs(&mut self, chosen: Array1<f32>, rejected: Array1<f32>) {
        self.state = ReferenceState::Attached { chosen, rejected };
    }

    /// Fetch the example at `index`, with the reference overlay if attached.
    ///
    /// # Errors
    ///
    /// Base-dataset errors propagate unchanged; after attachment, an index
    /// beyond either tensor's length fails with an index error.
    pub fn get(&self, index: usize) -> Result<AugmentedExample> {
        let example = self.base.get(index)?;

        let reference = match &self.state {
            ReferenceState::Unattached => None,
            ReferenceState::Attached { chosen, rejected } => {
                let chosen = *chosen
                    .get(index)
                    .ok_or(DatasetError::IndexOutOfRange { index, len: chosen.len() })?;
                let rejected = *rejected
                    .get(index)
                    .ok_or(DatasetError::IndexOutOfRange { index, len: rejected.len() })?;
                Some(ReferenceLogProbs { chosen, rejected })
            }
        };

        Ok(AugmentedExample { example, reference })
    }
}
