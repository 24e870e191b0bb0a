//! Preference dataset over a raw record source.

use serde_json::Value;

use super::builder::build_preference_example;
use super::error::{DatasetError, Result};
use super::example::PreferenceExample;
use super::indexable::ExampleSource;
use crate::source::{load_source, LoadOptions, Split};
use crate::tokenizer::MessageTokenizer;
use crate::transform::MessageTransform;

/// Configuration for [`PreferenceDataset`].
///
/// `source` is the loader identifier (`"json"` for local files); loader
/// options pass through verbatim. `packed` exists only so that a caller
/// wiring this from generic training config gets a hard error instead of a
/// silently ignored flag.
#[derive(Debug, Clone)]
pub struct PreferenceDatasetConfig {
    source: String,
    load: LoadOptions,
    train_on_input: bool,
    packed: bool,
}

impl PreferenceDatasetConfig {
    /// Create a config for the given source identifier.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            load: LoadOptions::default(),
            train_on_input: false,
            packed: false,
        }
    }

    /// Set the local data file forwarded to the loader.
    #[must_use]
    pub fn data_files(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.load = self.load.data_files(path);
        self
    }

    /// Select the split forwarded to the loader.
    #[must_use]
    pub fn split(mut self, split: Split) -> Self {
        self.load = self.load.split(split);
        self
    }

    /// Cap the number of records forwarded to the loader.
    #[must_use]
    pub fn max_records(mut self, n: usize) -> Self {
        self.load = self.load.max_records(n);
        self
    }

    /// Forward shuffling to the loader.
    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.load = self.load.shuffle(shuffle);
        self
    }

    /// Forward the shuffle seed to the loader.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.load = self.load.seed(seed);
        self
    }

    /// Also train on prompt tokens instead of masking them out.
    #[must_use]
    pub fn train_on_input(mut self, train_on_input: bool) -> Self {
        self.train_on_input = train_on_input;
        self
    }

    /// Request sequence packing. Always rejected at construction; preference
    /// pairs cannot be packed.
    #[must_use]
    pub fn packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }
}

/// An indexable collection of tokenized preference pairs.
///
/// Holds the raw records plus the transform and tokenizer; tokenization runs
/// on every [`get`](ExampleSource::get) call rather than upfront, keeping
/// memory bounded for large corpora at the cost of re-tokenizing repeated
/// accesses. There is no caching layer.
pub struct PreferenceDataset {
    records: Vec<Value>,
    transform: Box<dyn MessageTransform>,
    tokenizer: Box<dyn MessageTokenizer>,
    train_on_input: bool,
}

impl PreferenceDataset {
    /// Construct a dataset: validate the config, then load the raw records.
    ///
    /// # Errors
    ///
    /// Fails with [`DatasetError::PackingUnsupported`] for `packed=true`
    /// (checked before any data is read), or with the loader's error.
    pub fn new(
        config: PreferenceDatasetConfig,
        transform: Box<dyn MessageTransform>,
        tokenizer: Box<dyn MessageTokenizer>,
    ) -> Result<Self> {
        if config.packed {
            return Err(DatasetError::PackingUnsupported);
        }

        let records = load_source(&config.source, &config.load)?;

        Ok(Self { records, transform, tokenizer, train_on_input: config.train_on_input })
    }

    /// Construct directly from already-loaded records, bypassing the loader.
    #[must_use]
    pub fn from_records(
        records: Vec<Value>,
        transform: Box<dyn MessageTransform>,
        tokenizer: Box<dyn MessageTokenizer>,
        train_on_input: bool,
    ) -> Self {
        Self { records, transform, tokenizer, train_on_input }
    }
}

// Transform and tokenizer are opaque trait objects; show the record count
// and masking policy instead.
impl std::fmt::Debug for PreferenceDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceDataset")
            .field("records", &self.records.len())
            .field("train_on_input", &self.train_on_input)
            .finish_non_exhaustive()
    }
}

impl ExampleSource for PreferenceDataset {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Result<PreferenceExample> {
        let record = self
            .records
            .get(index)
            .ok_or(DatasetError::IndexOutOfRange { index, len: self.records.len() })?;

        let messages = self.transform.transform(record)?;
        let example =
            build_preference_example(&messages, self.tokenizer.as_ref(), self.train_on_input)?;
        Ok(example)
    }
}
