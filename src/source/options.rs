//! Loader options.

use std::path::PathBuf;

/// Dataset split selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Split {
    /// Training split
    #[default]
    Train,
    /// Validation split
    Validation,
    /// Test split
    Test,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Validation => write!(f, "validation"),
            Self::Test => write!(f, "test"),
        }
    }
}

/// Options forwarded to the record loader
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Local file for file-based sources
    pub data_files: Option<PathBuf>,
    /// Split to load. A single local file holds exactly one split, so this
    /// selects nothing locally; it is carried for interface compatibility.
    pub split: Split,
    /// Maximum number of records (None = all)
    pub max_records: Option<usize>,
    /// Shuffle records after loading
    pub shuffle: bool,
    /// Random seed for shuffling
    pub seed: Option<u64>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { data_files: None, split: Split::Train, max_records: None, shuffle: false, seed: Some(42) }
    }
}

impl LoadOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local data file.
    #[must_use]
    pub fn data_files(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_files = Some(path.into());
        self
    }

    /// Select a split.
    #[must_use]
    pub fn split(mut self, split: Split) -> Self {
        self.split = split;
        self
    }

    /// Cap the number of records.
    #[must_use]
    pub fn max_records(mut self, n: usize) -> Self {
        self.max_records = Some(n);
        self
    }

    /// Enable or disable shuffling.
    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
