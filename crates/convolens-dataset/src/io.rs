//! JSONL I/O and atomic file operations

use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Records read from a JSONL file, plus how many lines were unusable
#[derive(Debug)]
pub struct JsonlBatch<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Read all records from a JSONL file.
///
/// Blank lines are ignored; lines that fail to parse are skipped and counted.
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<JsonlBatch<T>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut skipped = 0;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(line = lineno + 1, error = %e, "skipping malformed JSONL line");
                skipped += 1;
            }
        }
    }

    Ok(JsonlBatch { records, skipped })
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}
