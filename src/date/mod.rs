pub mod numeric;
pub mod text;

use crate::record::CellValue;

/// Normalize any host cell value to epoch milliseconds, UTC.
///
/// `None` means the value could not be read as a date. Variants are tried
/// exactly as tagged; a numeric string goes through the textual patterns,
/// never the magnitude bands.
pub fn normalize_to_timestamp(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Absent => None,
        CellValue::DateTime(dt) => Some(dt.timestamp_millis()),
        CellValue::Number(n) => numeric::epoch_ms_from_number(*n),
        CellValue::Text(s) => text::epoch_ms_from_text(s),
    }
}

/// Render a value as zero-padded `dd-mm-yyyy` (UTC fields), or empty when
/// unparseable. Display-only; layered on the timestamp, not a separate parse.
pub fn format_display(value: &CellValue) -> String {
    normalize_to_timestamp(value)
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%d-%m-%Y").to_string())
        .unwrap_or_default()
}
