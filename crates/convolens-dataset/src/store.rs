//! Loading datasets and persisting report configuration

use crate::delimited::parse_csv;
use crate::error::{DatasetError, Result};
use crate::io::{atomic_write, read_jsonl};
use convolens_core::{QuestionRecord, ReportConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load question records, choosing the parser from the file extension.
///
/// `.jsonl` and `.ndjson` are read line by line; anything else is treated as
/// CSV with a header row.
pub fn load_records(path: &Path) -> Result<Vec<QuestionRecord>> {
    let io_err = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let records = match extension.as_deref() {
        Some("jsonl") | Some("ndjson") => {
            let batch = read_jsonl::<QuestionRecord>(path).map_err(io_err)?;
            if batch.skipped > 0 {
                tracing::warn!(
                    path = %path.display(),
                    skipped = batch.skipped,
                    "some lines could not be parsed"
                );
            }
            batch.records
        }
        _ => {
            let file = File::open(path).map_err(io_err)?;
            parse_csv(BufReader::new(file))?
        }
    };

    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Load report configuration; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    if !path.exists() {
        return Ok(ReportConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Save report configuration as pretty JSON
pub fn save_config(path: &Path, config: &ReportConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, json.as_bytes()).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records_csv() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tagged.csv");
        std::fs::write(&path, "session_id,user_intent\ns1,greeting\ns2,validation\n").unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].intent(), "validation");
    }

    #[test]
    fn test_load_records_jsonl() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("tagged.JSONL");
        std::fs::write(
            &path,
            "{\"session_id\":\"s1\",\"has_follow_up_questions\":\"True\"}\n",
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].has_follow_up());
    }

    #[test]
    fn test_load_records_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = load_records(&temp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let mut config = ReportConfig::default();
        config.example_pool_size = 3;
        config.fallback_example = "nothing yet".to_string();
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_config_is_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let loaded = load_config(&temp.path().join("config.json")).unwrap();
        assert_eq!(loaded, ReportConfig::default());
    }

    #[test]
    fn test_invalid_config_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(&path), Err(DatasetError::Json { .. })));
    }
}
