//! Local JSON/JSONL record loader.

use std::path::Path;

use rand::prelude::*;
use serde_json::Value;

use super::error::{Result, SourceError};
use super::options::LoadOptions;

/// Load raw records for a source identifier.
///
/// `"json"` reads `options.data_files` as either a JSON array of records or
/// a JSONL file (one record per line, blank lines skipped). Any other
/// identifier names a remote source this crate does not fetch and fails with
/// [`SourceError::UnknownSource`].
pub fn load_source(source: &str, options: &LoadOptions) -> Result<Vec<Value>> {
    if source != "json" {
        return Err(SourceError::UnknownSource { name: source.to_string() });
    }

    let path = options.data_files.as_deref().ok_or(SourceError::MissingDataFiles)?;
    let mut records = read_json_records(path)?;

    if options.shuffle {
        if let Some(seed) = options.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            records.shuffle(&mut rng);
        }
    }

    if let Some(max) = options.max_records {
        records.truncate(max);
    }

    Ok(records)
}

fn read_json_records(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;

    if content.trim_start().starts_with('[') {
        let records: Vec<Value> = serde_json::from_str(&content)?;
        return Ok(records);
    }

    // JSONL: one record per line
    let mut records = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line).map_err(|e| SourceError::InvalidLine {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_unknown_source_rejected() {
        let err = load_source("hh_rlhf", &LoadOptions::default()).unwrap_err();
        match &err {
            SourceError::UnknownSource { name } => assert_eq!(name, "hh_rlhf"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("hh_rlhf"));
        // Unknown-source errors carry no underlying cause.
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_json_requires_data_files() {
        let err = load_source("json", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, SourceError::MissingDataFiles));
    }

    #[test]
    fn test_load_json_array() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"[{{"a": 1}}, {{"a": 2}}]"#).unwrap();

        let records =
            load_source("json", &LoadOptions::new().data_files(f.path())).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["a"], 2);
    }

    #[test]
    fn test_load_jsonl_skips_blank_lines() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, r#"{{"a": 1}}"#).unwrap();
        writeln!(f).unwrap();
        writeln!(f, r#"{{"a": 2}}"#).unwrap();

        let records =
            load_source("json", &LoadOptions::new().data_files(f.path())).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_invalid_jsonl_line_reports_line_number() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, r#"{{"a": 1}}"#).unwrap();
        writeln!(f, "not json").unwrap();

        let err =
            load_source("json", &LoadOptions::new().data_files(f.path())).unwrap_err();
        match err {
            SourceError::InvalidLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_max_records_truncates() {
        let mut f = NamedTempFile::new().unwrap();
        for i in 0..10 {
            writeln!(f, r#"{{"a": {i}}}"#).unwrap();
        }

        let records =
            load_source("json", &LoadOptions::new().data_files(f.path()).max_records(3))
                .unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_shuffle_deterministic_for_seed() {
        let mut f = NamedTempFile::new().unwrap();
        for i in 0..50 {
            writeln!(f, r#"{{"a": {i}}}"#).unwrap();
        }

        let opts = LoadOptions::new().data_files(f.path()).shuffle(true).seed(7);
        let first = load_source("json", &opts).unwrap();
        let second = load_source("json", &opts).unwrap();
        assert_eq!(first, second);

        let unshuffled =
            load_source("json", &LoadOptions::new().data_files(f.path())).unwrap();
        assert_ne!(first, unshuffled);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let opts = LoadOptions::new().data_files("/nonexistent/records.jsonl");
        let err = load_source("json", &opts).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
