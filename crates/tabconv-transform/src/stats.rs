//! Per-field coercion tallies collected during forward conversion.

use tabconv_model::{FieldKind, NormalizedValue};

/// Counts for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStats {
    pub field: String,
    pub kind: FieldKind,
    /// Numeric or timestamp values that were coerced.
    pub coerced: usize,
    /// Numeric or timestamp values left as text.
    pub unchanged: usize,
    /// Values of text fields.
    pub text: usize,
    pub absent: usize,
}

impl FieldStats {
    pub fn new(field: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            field: field.into(),
            kind,
            coerced: 0,
            unchanged: 0,
            text: 0,
            absent: 0,
        }
    }

    pub fn record(&mut self, value: &NormalizedValue) {
        match value {
            NormalizedValue::Absent => self.absent += 1,
            NormalizedValue::Text(_) => self.text += 1,
            other if other.is_unchanged() => self.unchanged += 1,
            _ => self.coerced += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.coerced + self.unchanged + self.text + self.absent
    }
}

/// Counts for every column, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoercionStats {
    fields: Vec<FieldStats>,
}

impl CoercionStats {
    /// Entry for `field`, created on first use.
    pub fn entry(&mut self, field: &str, kind: FieldKind) -> &mut FieldStats {
        let index = match self.fields.iter().position(|stats| stats.field == field) {
            Some(index) => index,
            None => {
                self.fields.push(FieldStats::new(field, kind));
                self.fields.len() - 1
            }
        };
        &mut self.fields[index]
    }

    pub fn fields(&self) -> &[FieldStats] {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&FieldStats> {
        self.fields.iter().find(|stats| stats.field == field)
    }

    pub fn total_unchanged(&self) -> usize {
        self.fields.iter().map(|stats| stats.unchanged).sum()
    }
}
