//! Preferir: preference-pair data preparation for fine-tuning.
//!
//! Converts conversational preference records (a shared prompt plus a chosen
//! and a rejected continuation) into tokenized, label-masked examples for
//! preference-optimization objectives such as DPO, and wraps a built dataset
//! with precomputed reference log-probabilities when the loss needs a
//! reference policy's likelihood.
//!
//! # Example
//!
//! ```
//! use preferir::dataset::{ExampleSource, PreferenceDataset, ReferenceLogProbDataset};
//! use preferir::tokenizer::MockTokenizer;
//! use preferir::transform::ChosenRejectedTransform;
//! use ndarray::array;
//! use serde_json::json;
//!
//! let records = vec![json!({
//!     "prompt": [{"role": "user", "content": "What is 2+2?"}],
//!     "chosen": [{"role": "assistant", "content": "The answer is 4."}],
//!     "rejected": [{"role": "assistant", "content": "The answer is 12."}],
//! })];
//!
//! let ds = PreferenceDataset::from_records(
//!     records,
//!     Box::new(ChosenRejectedTransform::new()),
//!     Box::new(MockTokenizer::default()),
//!     false,
//! );
//! let example = ds.get(0)?;
//! assert_eq!(example.chosen_input_ids.len(), example.chosen_labels.len());
//!
//! let mut ds = ReferenceLogProbDataset::new(ds);
//! ds.attach_reference_log_probs(array![-4.2], array![-9.7]);
//! assert!(ds.get(0)?.reference.is_some());
//! # Ok::<(), preferir::dataset::DatasetError>(())
//! ```

pub mod dataset;
pub mod message;
pub mod source;
pub mod tokenizer;
pub mod transform;

pub use dataset::{
    build_preference_example, AugmentedExample, DatasetError, ExampleSource, PreferenceDataset,
    PreferenceDatasetConfig, PreferenceExample, ReferenceLogProbDataset, ReferenceLogProbs,
};
pub use message::{Message, Role};
pub use tokenizer::{MessageTokenizer, TokenId, CROSS_ENTROPY_IGNORE_IDX};
pub use transform::{ChosenRejectedTransform, MessageTransform, PreferenceMessages};
