//! Timestamp normalization.
//!
//! A local date-time in the exact shape `YYYY-MM-DDTHH:MM:SS` is read as UTC
//! and gets a `Z` suffix. The check is on shape only: calendar validity is
//! not enforced here (see [`is_valid_timestamp`]).

use chrono::DateTime;
use tabconv_model::Coercion;

const LOCAL_TIMESTAMP_LEN: usize = "YYYY-MM-DDTHH:MM:SS".len();

/// True if `value` is exactly `YYYY-MM-DDTHH:MM:SS` (ASCII digits, no zone,
/// no fractional seconds).
pub fn is_local_timestamp(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != LOCAL_TIMESTAMP_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(idx, byte)| match idx {
        4 | 7 => *byte == b'-',
        10 => *byte == b'T',
        13 | 16 => *byte == b':',
        _ => byte.is_ascii_digit(),
    })
}

/// Appends `Z` to local timestamps, passes anything else through.
pub fn normalize_timestamp(trimmed: &str) -> Coercion<String> {
    if is_local_timestamp(trimmed) && !trimmed.ends_with('Z') {
        Coercion::Coerced(format!("{trimmed}Z"))
    } else {
        Coercion::Unchanged(trimmed.to_string())
    }
}

/// True if `value` is a real RFC 3339 date-time (zone required).
pub fn is_valid_timestamp(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value.trim()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_timestamp_gets_utc_suffix() {
        assert_eq!(
            normalize_timestamp("2024-01-01T00:00:00"),
            Coercion::Coerced("2024-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn zoned_and_fractional_pass_through() {
        for value in [
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:00:00+07:00",
            "2024-01-01T00:00:00.123",
            "2024-01-01 00:00:00",
            "2024-01-01",
            "01/02/2024",
        ] {
            assert_eq!(
                normalize_timestamp(value),
                Coercion::Unchanged(value.to_string()),
                "{value}"
            );
        }
    }

    #[test]
    fn shape_check_ignores_calendar() {
        assert!(is_local_timestamp("2024-13-45T99:99:99"));
        assert!(!is_valid_timestamp("2024-13-45T99:99:99Z"));
    }

    #[test]
    fn non_ascii_digits_do_not_match() {
        assert!(!is_local_timestamp("２０２４-01-01T00:00:00"));
    }

    #[test]
    fn valid_timestamp_requires_zone() {
        assert!(is_valid_timestamp("2024-02-29T23:59:59Z"));
        assert!(is_valid_timestamp("2024-02-29T23:59:59.5+07:00"));
        assert!(!is_valid_timestamp("2024-02-29T23:59:59"));
        assert!(!is_valid_timestamp("2023-02-29T00:00:00Z"));
    }
}
