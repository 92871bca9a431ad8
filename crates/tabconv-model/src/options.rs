//! Configuration options for conversion.

use serde::{Deserialize, Serialize};

/// What to do with numeric or timestamp values that cannot be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoercionMode {
    /// Keep the original text in the output.
    #[default]
    Lenient,
    /// Abort the conversion and report the offending field.
    Strict,
}

/// Options controlling conversion behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub coercion: CoercionMode,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with strict coercion enabled.
    pub fn strict() -> Self {
        Self {
            coercion: CoercionMode::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.coercion == CoercionMode::Strict
    }
}
