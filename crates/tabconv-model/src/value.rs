//! Normalized values produced by forward conversion.

use serde_json::Value;

/// One record in the document format. Key order is the column order.
pub type Document = serde_json::Map<String, Value>;

/// Result of a best-effort coercion.
///
/// `Unchanged` carries the trimmed original text so callers can tell a
/// coerced value apart from one that was left as a string.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion<T> {
    Coerced(T),
    Unchanged(String),
}

impl<T> Coercion<T> {
    pub fn is_coerced(&self) -> bool {
        matches!(self, Coercion::Coerced(_))
    }
}

/// A parsed numeric value in its declared kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Float(f64),
    Integer(i64),
}

impl Number {
    pub fn into_json(self) -> Value {
        match self {
            // Non-finite floats become null; the normalizer never produces them.
            Number::Float(value) => Value::from(value),
            Number::Integer(value) => Value::from(value),
        }
    }
}

/// A field value after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    /// Missing, or empty after trimming.
    Absent,
    /// Plain text field, trimmed.
    Text(String),
    /// Numeric field.
    Number(Coercion<Number>),
    /// Timestamp field; `Coerced` holds the `Z`-suffixed text.
    Timestamp(Coercion<String>),
}

impl NormalizedValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, NormalizedValue::Absent)
    }

    /// True when a numeric or timestamp coercion left the value as text.
    pub fn is_unchanged(&self) -> bool {
        match self {
            NormalizedValue::Number(coercion) => !coercion.is_coerced(),
            NormalizedValue::Timestamp(coercion) => !coercion.is_coerced(),
            NormalizedValue::Absent | NormalizedValue::Text(_) => false,
        }
    }

    /// Convert into the value stored in the output document.
    pub fn into_json(self) -> Value {
        match self {
            NormalizedValue::Absent => Value::Null,
            NormalizedValue::Text(text) => Value::String(text),
            NormalizedValue::Number(Coercion::Coerced(number)) => number.into_json(),
            NormalizedValue::Number(Coercion::Unchanged(text))
            | NormalizedValue::Timestamp(Coercion::Unchanged(text)) => Value::String(text),
            NormalizedValue::Timestamp(Coercion::Coerced(text)) => Value::String(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_becomes_null() {
        assert_eq!(NormalizedValue::Absent.into_json(), Value::Null);
    }

    #[test]
    fn coerced_float_keeps_fraction_marker() {
        let value = NormalizedValue::Number(Coercion::Coerced(Number::Float(1000.0)));
        assert_eq!(value.into_json().to_string(), "1000.0");
    }

    #[test]
    fn unchanged_number_stays_text() {
        let value = NormalizedValue::Number(Coercion::Unchanged("N/A".to_string()));
        assert!(value.is_unchanged());
        assert_eq!(value.into_json(), Value::String("N/A".to_string()));
    }

    #[test]
    fn integer_serializes_without_fraction() {
        let value = NormalizedValue::Number(Coercion::Coerced(Number::Integer(5)));
        assert!(!value.is_unchanged());
        assert_eq!(value.into_json().to_string(), "5");
    }
}
