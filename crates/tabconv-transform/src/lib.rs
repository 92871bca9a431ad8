//! Value transformation utilities.
//!
//! - **normalization**: per-field cleaning and type coercion (forward direction)
//! - **strict**: optional rejection of values that coercion left as text
//! - **stats**: per-field coercion tallies
//! - **flatten**: document to CSV row flattening (reverse direction)

pub mod flatten;
pub mod normalization;
pub mod stats;
pub mod strict;

pub use flatten::{cell_text, flatten_document, header_from_document};
pub use normalization::{ValueNormalizer, normalize_value};
pub use stats::{CoercionStats, FieldStats};
pub use strict::{StrictViolation, check_strict};
