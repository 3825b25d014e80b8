/// Epoch milliseconds of 1899-12-30T00:00:00Z, the spreadsheet serial anchor.
const SERIAL_EPOCH_MS: i64 = -2_209_161_600_000;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Classify a bare number as a date encoding by magnitude.
///
/// Exports commonly deliver dates as epoch milliseconds, epoch seconds, or
/// spreadsheet day serials; the bands below separate those without a format
/// hint. Anything outside all three bands is assumed not to be a date.
pub fn epoch_ms_from_number(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    let magnitude = n.abs();
    if magnitude > 1e12 {
        // Already epoch milliseconds
        Some(n as i64)
    } else if magnitude > 1e9 {
        // Epoch seconds
        Some((n * 1000.0) as i64)
    } else if magnitude > 20_000.0 && magnitude < 90_000.0 {
        // Day serial anchored at 1899-12-30 (covers roughly 1954..2146)
        Some(SERIAL_EPOCH_MS + (n * MS_PER_DAY) as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millisecond_scale_passthrough() {
        assert_eq!(epoch_ms_from_number(1_700_000_000_000.0), Some(1_700_000_000_000));
    }

    #[test]
    fn test_second_scale_upscaled() {
        assert_eq!(epoch_ms_from_number(1_700_000_000.0), Some(1_700_000_000_000));
    }

    #[test]
    fn test_serial_days() {
        // 1899-12-30 + 45000 days = 2023-03-15T00:00:00Z
        assert_eq!(epoch_ms_from_number(45_000.0), Some(1_678_838_400_000));
    }

    #[test]
    fn test_serial_band_is_open() {
        assert_eq!(epoch_ms_from_number(20_000.0), None);
        assert_eq!(epoch_ms_from_number(90_000.0), None);
        assert!(epoch_ms_from_number(20_000.5).is_some());
        assert!(epoch_ms_from_number(89_999.5).is_some());
    }

    #[test]
    fn test_out_of_band_rejected() {
        assert_eq!(epoch_ms_from_number(0.0), None);
        assert_eq!(epoch_ms_from_number(42.0), None);
        assert_eq!(epoch_ms_from_number(500_000_000.0), None);
        assert_eq!(epoch_ms_from_number(f64::NAN), None);
        assert_eq!(epoch_ms_from_number(f64::INFINITY), None);
    }

    #[test]
    fn test_negative_epoch_keeps_sign() {
        // Pre-1970 instants arrive as negative epoch values
        assert_eq!(epoch_ms_from_number(-2_000_000_000_000.0), Some(-2_000_000_000_000));
        assert_eq!(epoch_ms_from_number(-1_500_000_000.0), Some(-1_500_000_000_000));
    }
}
