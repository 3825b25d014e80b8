use chrono::{DateTime, Utc};
use serde::Serialize;

/// A loosely-typed cell value as delivered by the host table.
///
/// Host rows arrive with no schema: a "date" column may hold a native
/// datetime, an epoch number, a spreadsheet serial, or free text. Each
/// variant is handled explicitly; there is no implicit coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Absent,
    Number(f64),
    Text(String),
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// True when the value carries nothing usable: absent, or blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Absent => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) | CellValue::DateTime(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Image URL (non-empty after trimming; enforced at ingest)
    pub url: String,
    /// Card title
    pub title: String,
    /// First subtitle line
    pub sub1: String,
    /// Second subtitle line (may be overwritten with a rendered date)
    pub sub2: String,
    /// Raw date value, shape unknown until normalization
    pub date: CellValue,
    /// Original position, used only for stable tie-breaking
    #[serde(skip)]
    pub index: usize,
}

impl Record {
    pub fn new(url: String, title: String, sub1: String, sub2: String, index: usize) -> Self {
        Self {
            url,
            title,
            sub1,
            sub2,
            date: CellValue::Absent,
            index,
        }
    }
}
