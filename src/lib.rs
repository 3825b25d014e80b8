//! Best-effort chronological ordering for image gallery rows.
//!
//! Host tables deliver date columns in whatever shape the upstream export
//! produced: native datetimes, epoch numbers, spreadsheet serials, localized
//! text. [`date::normalize_to_timestamp`] folds all of those into UTC epoch
//! milliseconds (or `None`), and [`sort::sort_chronologically`] orders a row
//! set on the best available date column, keeping unparseable rows at the
//! end in their original order. Both are pure; no I/O, no shared state.

pub mod date;
pub mod ingest;
pub mod page;
pub mod record;
pub mod sort;

pub use date::{format_display, normalize_to_timestamp};
pub use record::{CellValue, Record};
pub use sort::sort_chronologically;
