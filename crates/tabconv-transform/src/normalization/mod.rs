//! Normalization of raw CSV cell values.
//!
//! - **numeric**: thousands separator stripping and numeric parsing
//! - **timestamp**: UTC suffixing of local ISO 8601 date-times

pub mod numeric;
pub mod timestamp;

pub use numeric::{coerce_number, parse_f64, parse_i64, strip_thousands_separators};
pub use timestamp::{is_local_timestamp, is_valid_timestamp, normalize_timestamp};

use tabconv_model::{FieldClassification, FieldKind, NormalizedValue};
use tracing::trace;

/// Normalize one raw value according to its field kind.
///
/// `None` and whitespace-only values become [`NormalizedValue::Absent`].
/// Coercion never fails: values that cannot be coerced are kept as their
/// trimmed text inside [`tabconv_model::Coercion::Unchanged`].
pub fn normalize_value(kind: FieldKind, raw: Option<&str>) -> NormalizedValue {
    let Some(raw) = raw else {
        return NormalizedValue::Absent;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NormalizedValue::Absent;
    }
    let value = match kind {
        FieldKind::Timestamp => NormalizedValue::Timestamp(normalize_timestamp(trimmed)),
        FieldKind::Float | FieldKind::Integer => {
            NormalizedValue::Number(coerce_number(trimmed, kind))
        }
        FieldKind::Text => NormalizedValue::Text(trimmed.to_string()),
    };
    if value.is_unchanged() {
        trace!(%kind, value = trimmed, "value left unchanged");
    }
    value
}

/// Normalizer bound to a field classification.
#[derive(Debug, Clone, Copy)]
pub struct ValueNormalizer<'a> {
    classification: &'a FieldClassification,
}

impl<'a> ValueNormalizer<'a> {
    pub fn new(classification: &'a FieldClassification) -> Self {
        Self { classification }
    }

    pub fn kind_of(&self, field: &str) -> FieldKind {
        self.classification.kind_of(field)
    }

    /// Normalize the value of a named field.
    pub fn normalize(&self, field: &str, raw: Option<&str>) -> NormalizedValue {
        normalize_value(self.kind_of(field), raw)
    }
}
