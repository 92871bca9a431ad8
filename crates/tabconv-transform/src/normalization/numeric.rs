//! Numeric normalization utilities.

use tabconv_model::{Coercion, FieldKind, Number};

/// Removes every thousands separator (`,`).
pub fn strip_thousands_separators(value: &str) -> String {
    value.replace(',', "")
}

/// Parses a string as a finite f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Best-effort coercion of a trimmed, non-empty value to the field's numeric kind.
///
/// On failure the original text (separators included) is returned unchanged.
pub fn coerce_number(trimmed: &str, kind: FieldKind) -> Coercion<Number> {
    let cleaned = strip_thousands_separators(trimmed);
    let parsed = match kind {
        FieldKind::Integer => parse_i64(&cleaned).map(Number::Integer),
        _ => parse_f64(&cleaned).map(Number::Float),
    };
    match parsed {
        Some(number) => Coercion::Coerced(number),
        None => Coercion::Unchanged(trimmed.to_string()),
    }
}
