//! Indexable example source contract.

use super::error::Result;
use super::example::PreferenceExample;

/// A fixed-size, indexable collection of preference examples.
///
/// The seam between the concrete [`PreferenceDataset`](super::PreferenceDataset)
/// and anything wrapping it; test doubles implement it directly.
pub trait ExampleSource {
    /// Number of examples.
    fn len(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the example at `index`.
    ///
    /// # Errors
    ///
    /// Fails with an index error for `index >= len()`, or with whatever a
    /// collaborator (transform, tokenizer) raised.
    fn get(&self, index: usize) -> Result<PreferenceExample>;
}
