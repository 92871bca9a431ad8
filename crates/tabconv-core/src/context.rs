//! Conversion context: the field classification plus options.

use tabconv_model::{ConvertOptions, FieldClassification};

/// Everything a conversion needs besides its two paths.
#[derive(Debug, Clone, Default)]
pub struct ConversionContext {
    /// Field name to kind lookup used by the normalizer.
    pub classification: FieldClassification,
    pub options: ConvertOptions,
}

impl ConversionContext {
    /// Context with the built-in voucher classification and lenient coercion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field classification.
    pub fn with_classification(mut self, classification: FieldClassification) -> Self {
        self.classification = classification;
        self
    }

    /// Sets the conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }
}
