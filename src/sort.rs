use std::cmp::Ordering;

use crate::date;
use crate::record::Record;

/// Which row field supplies the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyField {
    Date,
    Sub1,
    Sub2,
    Title,
}

/// Reorder records chronologically, best effort.
///
/// Unparseable keys sink to the end in original relative order; parseable
/// ones sort ascending with original position breaking ties. Records are
/// never mutated or dropped, and fewer than two records is a no-op. When no
/// field qualifies as a date key the input comes back untouched.
pub fn sort_chronologically(records: Vec<Record>) -> Vec<Record> {
    if records.len() < 2 {
        return records;
    }
    let Some(field) = select_key_field(&records) else {
        return records;
    };

    let mut keyed: Vec<(Option<i64>, Record)> = records
        .into_iter()
        .map(|r| (key_timestamp(&r, field), r))
        .collect();

    // Composite order (parseability, timestamp, original index); the index
    // leg makes the order total, so stability does not hinge on the sort
    // algorithm used.
    keyed.sort_by(|(ka, a), (kb, b)| match (ka, kb) {
        (Some(ta), Some(tb)) => ta.cmp(tb).then(a.index.cmp(&b.index)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.index.cmp(&b.index),
    });

    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Pick the field to sort on.
///
/// A single non-empty `date` anywhere claims the sort for the date column,
/// even where individual values fail to parse. Only when the date column is
/// empty throughout do the subtitle/title columns compete, and one wins only
/// with enough parse coverage. These rules match what gallery users already
/// see; do not tune them.
fn select_key_field(records: &[Record]) -> Option<KeyField> {
    if records.iter().any(|r| !r.date.is_empty()) {
        return Some(KeyField::Date);
    }

    let threshold = coverage_threshold(records.len());
    for field in [KeyField::Sub1, KeyField::Sub2, KeyField::Title] {
        let parsed = records
            .iter()
            .filter(|r| key_timestamp(r, field).is_some())
            .count();
        if parsed >= threshold {
            return Some(field);
        }
    }
    None
}

/// At least 2 records and at least 80% of them must parse.
fn coverage_threshold(count: usize) -> usize {
    ((count as f64 * 0.8).ceil() as usize).max(2)
}

fn key_timestamp(record: &Record, field: KeyField) -> Option<i64> {
    match field {
        KeyField::Date => date::normalize_to_timestamp(&record.date),
        KeyField::Sub1 => date::text::epoch_ms_from_text(&record.sub1),
        KeyField::Sub2 => date::text::epoch_ms_from_text(&record.sub2),
        KeyField::Title => date::text::epoch_ms_from_text(&record.title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CellValue;

    fn rec(index: usize, title: &str, sub1: &str, sub2: &str, date: CellValue) -> Record {
        Record {
            url: format!("https://img.example/{index}.jpg"),
            title: title.to_string(),
            sub1: sub1.to_string(),
            sub2: sub2.to_string(),
            date,
            index,
        }
    }

    fn urls(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn test_fewer_than_two_is_noop() {
        assert!(sort_chronologically(vec![]).is_empty());
        let one = vec![rec(0, "a", "", "", CellValue::Absent)];
        assert_eq!(sort_chronologically(one.clone()), one);
    }

    #[test]
    fn test_date_field_sorts_ascending() {
        let input = vec![
            rec(0, "c", "", "", CellValue::Text("2023-03-01".into())),
            rec(1, "a", "", "", CellValue::Text("2023-01-01".into())),
            rec(2, "b", "", "", CellValue::Text("2023-02-01".into())),
        ];
        let sorted = sort_chronologically(input);
        let titles: Vec<&str> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_mixed_date_shapes_sort_together() {
        // Same column delivering serial, epoch seconds and text
        let input = vec![
            rec(0, "ms", "", "", CellValue::Number(1_700_000_000_000.0)), // 2023-11-14
            rec(1, "serial", "", "", CellValue::Number(45_000.0)),        // 2023-03-15
            rec(2, "text", "", "", CellValue::Text("01/01/2023".into())),
        ];
        let sorted = sort_chronologically(input);
        let titles: Vec<&str> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["text", "serial", "ms"]);
    }

    #[test]
    fn test_unparseable_sink_in_original_order() {
        let input = vec![
            rec(0, "x", "", "", CellValue::Text("garbage".into())),
            rec(1, "b", "", "", CellValue::Text("2023-02-01".into())),
            rec(2, "y", "", "", CellValue::Text("???".into())),
            rec(3, "a", "", "", CellValue::Text("2023-01-01".into())),
        ];
        let sorted = sort_chronologically(input);
        let titles: Vec<&str> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "x", "y"]);
    }

    #[test]
    fn test_equal_timestamps_keep_original_order() {
        let input = vec![
            rec(0, "first", "", "", CellValue::Text("2023-05-05".into())),
            rec(1, "second", "", "", CellValue::Text("05/05/2023".into())),
            rec(2, "third", "", "", CellValue::Text("2023-05-05".into())),
        ];
        let sorted = sort_chronologically(input);
        let titles: Vec<&str> = sorted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let input = vec![
            rec(0, "", "", "", CellValue::Text("2024-01-01".into())),
            rec(1, "", "", "", CellValue::Text("2022-01-01".into())),
            rec(2, "", "", "", CellValue::Text("bad".into())),
            rec(3, "", "", "", CellValue::Text("2023-01-01".into())),
        ];
        let once = sort_chronologically(input);
        let twice = sort_chronologically(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_any_nonempty_date_claims_the_sort() {
        // sub1 is fully parseable, but one garbage date value still forces
        // the date column; everything is then unparseable, so order holds.
        let input = vec![
            rec(0, "", "2023-03-01", "", CellValue::Text("garbage".into())),
            rec(1, "", "2023-01-01", "", CellValue::Absent),
            rec(2, "", "2023-02-01", "", CellValue::Absent),
        ];
        let sorted = sort_chronologically(input.clone());
        assert_eq!(urls(&sorted), urls(&input));
    }

    #[test]
    fn test_sub1_fallback_at_coverage() {
        // 4 of 5 parseable: meets ceil(0.8 * 5) = 4
        let input = vec![
            rec(0, "", "2023-05-01", "", CellValue::Absent),
            rec(1, "", "2023-04-01", "", CellValue::Absent),
            rec(2, "", "n/a", "", CellValue::Absent),
            rec(3, "", "2023-02-01", "", CellValue::Absent),
            rec(4, "", "2023-01-01", "", CellValue::Absent),
        ];
        let sorted = sort_chronologically(input);
        let subs: Vec<&str> = sorted.iter().map(|r| r.sub1.as_str()).collect();
        assert_eq!(
            subs,
            ["2023-01-01", "2023-02-01", "2023-04-01", "2023-05-01", "n/a"]
        );
    }

    #[test]
    fn test_sub2_fallback_when_sub1_misses() {
        let input = vec![
            rec(0, "", "apples", "2023-02-01", CellValue::Absent),
            rec(1, "", "pears", "2023-01-01", CellValue::Absent),
        ];
        let sorted = sort_chronologically(input);
        let subs: Vec<&str> = sorted.iter().map(|r| r.sub2.as_str()).collect();
        assert_eq!(subs, ["2023-01-01", "2023-02-01"]);
    }

    #[test]
    fn test_below_coverage_keeps_original_order() {
        // 1 of 2 parseable: under max(2, ceil(1.6)) = 2
        let input = vec![
            rec(0, "", "2023-02-01", "", CellValue::Absent),
            rec(1, "", "apples", "", CellValue::Absent),
        ];
        let sorted = sort_chronologically(input.clone());
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_coverage_threshold() {
        assert_eq!(coverage_threshold(2), 2);
        assert_eq!(coverage_threshold(3), 3); // ceil(2.4)
        assert_eq!(coverage_threshold(5), 4);
        assert_eq!(coverage_threshold(10), 8);
    }
}
