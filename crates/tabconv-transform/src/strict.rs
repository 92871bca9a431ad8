//! Strict mode: values that coercion left as text are reported instead of
//! passed through.

use thiserror::Error;

use tabconv_model::{Coercion, FieldKind, NormalizedValue};

use crate::normalization::is_valid_timestamp;

/// A numeric or timestamp value that does not meet its field kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: field '{field}' expects {kind} but has '{value}'")]
pub struct StrictViolation {
    /// 1-based data row (the header is not counted).
    pub row: usize,
    pub field: String,
    pub kind: FieldKind,
    pub value: String,
}

/// Returns the offending text when `value` breaks strict rules for `kind`.
///
/// Numbers must have been coerced. Timestamps must be valid RFC 3339 after
/// normalization, which also rejects shape-only matches such as month 13.
pub fn check_strict(kind: FieldKind, value: &NormalizedValue) -> Option<String> {
    match (kind, value) {
        (_, NormalizedValue::Number(Coercion::Unchanged(text))) => Some(text.clone()),
        (
            FieldKind::Timestamp,
            NormalizedValue::Timestamp(Coercion::Coerced(text) | Coercion::Unchanged(text)),
        ) if !is_valid_timestamp(text) => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::normalize_value;

    fn strict(kind: FieldKind, raw: &str) -> Option<String> {
        check_strict(kind, &normalize_value(kind, Some(raw)))
    }

    #[test]
    fn coerced_values_pass() {
        assert_eq!(strict(FieldKind::Float, "1,000.5"), None);
        assert_eq!(strict(FieldKind::Integer, "12"), None);
        assert_eq!(strict(FieldKind::Timestamp, "2024-05-01T10:00:00"), None);
        assert_eq!(strict(FieldKind::Timestamp, "2024-05-01T10:00:00+02:00"), None);
    }

    #[test]
    fn unchanged_numbers_fail() {
        assert_eq!(strict(FieldKind::Float, "N/A"), Some("N/A".to_string()));
        assert_eq!(strict(FieldKind::Integer, "1.5"), Some("1.5".to_string()));
    }

    #[test]
    fn malformed_timestamps_fail() {
        assert_eq!(
            strict(FieldKind::Timestamp, "2024-13-01T00:00:00"),
            Some("2024-13-01T00:00:00Z".to_string())
        );
        assert_eq!(
            strict(FieldKind::Timestamp, "tomorrow"),
            Some("tomorrow".to_string())
        );
    }

    #[test]
    fn absent_and_text_pass() {
        assert_eq!(check_strict(FieldKind::Float, &NormalizedValue::Absent), None);
        assert_eq!(strict(FieldKind::Text, "anything"), None);
    }

    #[test]
    fn violation_message_names_row_and_field() {
        let violation = StrictViolation {
            row: 3,
            field: "value".to_string(),
            kind: FieldKind::Float,
            value: "N/A".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "row 3: field 'value' expects float but has 'N/A'"
        );
    }
}
