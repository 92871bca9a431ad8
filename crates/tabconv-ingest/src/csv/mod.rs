//! CSV table reading.

mod reader;

pub use reader::{CsvTable, read_csv_table};
