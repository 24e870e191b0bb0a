//! Preference datasets.
//!
//! The pipeline core: builds tokenized, label-masked preference examples
//! from raw records, and optionally overlays precomputed reference
//! log-probabilities for losses that need a reference policy's likelihood.
//!
//! # Data flow
//!
//! raw record -> message transform -> (chosen, rejected) message lists
//! -> tokenizer (per branch) -> label masking -> [`PreferenceExample`]
//! -> optional reference-logprob overlay -> training loop

mod builder;
mod error;
mod example;
mod indexable;
mod preference;
mod reference;


pub use builder::{build_preference_example, shared_prompt_prefix_len};
pub use error::{DatasetError, Result};
pub use example::{AugmentedExample, PreferenceExample, ReferenceLogProbs};
pub use indexable::ExampleSource;
pub use preference::{PreferenceDataset, PreferenceDatasetConfig};
pub use reference::ReferenceLogProbDataset;
