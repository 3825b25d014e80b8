use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

// Day-first: 31/12/2023, 5.1.24, 31-12-2023 23:59[:59]
static DMY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})(?:\s+(\d{1,2}):(\d{2})(?::(\d{2}))?)?$")
        .unwrap()
});

// Year-first: 2023-12-31, 2023/12/31T10:30[:45], time delimited by T or space
static YMD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})(?:[T ](\d{1,2}):(\d{2})(?::(\d{2}))?)?$")
        .unwrap()
});

static FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
static FALLBACK_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parse a textual date into epoch milliseconds, UTC.
///
/// Patterns are tried in order and the first regex that matches decides the
/// outcome: a matched string with impossible calendar fields (e.g. 31/02/2023)
/// is unparseable, it does not fall through to later patterns. Ambiguous
/// all-numeric inputs like `01-02-2023` are always read day-first.
pub fn epoch_ms_from_text(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = DMY_RE.captures(s) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year = expand_year(caps[3].parse().ok()?);
        let (hour, min, sec) = time_fields(&caps, 4);
        return utc_timestamp(year, month, day, hour, min, sec);
    }

    if let Some(caps) = YMD_RE.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let (hour, min, sec) = time_fields(&caps, 4);
        return utc_timestamp(year, month, day, hour, min, sec);
    }

    parse_generic(s)
}

/// Two-digit years pivot at 70: 70..99 -> 1900s, 00..69 -> 2000s
fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year >= 70 {
            1900 + year
        } else {
            2000 + year
        }
    } else {
        year
    }
}

fn time_fields(caps: &regex::Captures, first: usize) -> (u32, u32, u32) {
    let get = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    (get(first), get(first + 1), get(first + 2))
}

fn utc_timestamp(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(hour, min, sec)
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Last resort for strings neither regex recognizes: RFC 3339, RFC 2822,
/// then a handful of common unzoned formats read as UTC.
fn parse_generic(s: &str) -> Option<i64> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}
