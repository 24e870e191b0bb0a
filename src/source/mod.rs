//! Raw record loading.
//!
//! Loads preference records from local JSON/JSONL files. Remote hub sources
//! are a separate collaborator's concern; this loader recognizes the `"json"`
//! source identifier and fails fast on anything else.

mod error;
mod loader;
mod options;

pub use error::{Result, SourceError};
pub use loader::load_source;
pub use options::{LoadOptions, Split};
