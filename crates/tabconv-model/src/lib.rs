pub mod classification;
pub mod enums;
pub mod error;
pub mod options;
pub mod outcome;
pub mod value;

pub use classification::{DEFAULT_FIELDS, FieldClassification};
pub use enums::{Direction, FieldKind};
pub use error::{ClassificationError, Result};
pub use options::{CoercionMode, ConvertOptions};
pub use outcome::{ConversionOutcome, ConversionStatus};
pub use value::{Coercion, Document, NormalizedValue, Number};
