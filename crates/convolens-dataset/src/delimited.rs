//! Delimited-text loader
//!
//! Cells are typed the way a spreadsheet import would: empty cells are
//! absent, `true`/`TRUE` and `false`/`FALSE` become booleans, numeric text
//! becomes a number, and everything else stays a string. Notably `"True"`
//! stays a string; the engine's truthiness rule handles it.

use crate::error::{DatasetError, Result};
use convolens_core::QuestionRecord;
use serde_json::{Map, Number, Value};
use std::io::Read;

/// Parse CSV with a header row into question records
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<QuestionRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(DatasetError::MissingHeader);
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut object = Map::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            object.insert(header.clone(), coerce_cell(cell));
        }

        // Every field is a defaulted `Value`, so any object deserializes
        match serde_json::from_value::<QuestionRecord>(Value::Object(object)) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(error = %e, "skipping unreadable CSV row"),
        }
    }

    Ok(records)
}

/// Apply dynamic typing to one raw cell
pub fn coerce_cell(cell: &str) -> Value {
    match cell {
        "" => Value::Null,
        "true" | "TRUE" => Value::Bool(true),
        "false" | "FALSE" => Value::Bool(false),
        _ => parse_number(cell).unwrap_or_else(|| Value::String(cell.to_string())),
    }
}

fn parse_number(cell: &str) -> Option<Value> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed != cell {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    // Rust accepts "inf"/"NaN"; a spreadsheet would not
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}
