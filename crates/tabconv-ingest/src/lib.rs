//! Input readers.
//!
//! - **csv**: header-first CSV tables with ragged rows
//! - **json**: JSON arrays of objects

pub mod csv;
pub mod error;
pub mod json;

pub use crate::csv::{CsvTable, read_csv_table};
pub use error::{IngestError, Result};
pub use json::{parse_documents, read_documents};
