use anyhow::Context;
use serde_json::Value;

use crate::record::{CellValue, Record};

/// Result of reading a row file: kept records plus how many rows were
/// dropped for lacking an image URL.
pub struct IngestResult {
    pub records: Vec<Record>,
    pub dropped: usize,
}

/// Read gallery rows from a JSON array of objects.
///
/// Cell coercion mirrors the host table: `url`, `title`, `sub1` and `sub2`
/// are stringified, the raw `date` keeps its type for the normalizer. Rows
/// whose trimmed `url` is empty are dropped; `index` counts kept rows only.
pub fn rows_from_json(json: &str) -> anyhow::Result<IngestResult> {
    let rows: Value = serde_json::from_str(json).context("invalid JSON input")?;
    let rows = rows
        .as_array()
        .context("expected a JSON array of row objects")?;

    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for row in rows {
        let url = string_cell(row.get("url"));
        if url.trim().is_empty() {
            dropped += 1;
            continue;
        }
        let mut record = Record::new(
            url,
            string_cell(row.get("title")),
            string_cell(row.get("sub1")),
            string_cell(row.get("sub2")),
            records.len(),
        );
        record.date = date_cell(row.get("date"));
        records.push(record);
    }

    Ok(IngestResult { records, dropped })
}

fn string_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn date_cell(value: Option<&Value>) -> CellValue {
    match value {
        Some(Value::String(s)) => CellValue::Text(s.clone()),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Absent,
        },
        _ => CellValue::Absent,
    }
}
