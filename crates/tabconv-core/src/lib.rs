//! Tabular/document conversion.
//!
//! - **forward**: CSV table to JSON documents, with field normalization
//! - **reverse**: JSON documents to CSV table, with null flattening
//! - **runner**: dispatch by [`Direction`] and turn errors into an outcome

pub mod context;
pub mod error;
pub mod forward;
pub mod reverse;
pub mod runner;

pub use context::ConversionContext;
pub use error::{ConvertError, ErrorKind, Result};
pub use forward::{ForwardReport, convert_csv_to_json, table_to_documents};
pub use reverse::{FlatTable, ReverseReport, convert_json_to_csv, documents_to_table};
pub use runner::{ConversionReport, run_conversion};

pub use tabconv_model::{
    CoercionMode, ConversionOutcome, ConversionStatus, ConvertOptions, Direction,
    FieldClassification, FieldKind,
};
