//! Output generation.
//!
//! - **JSON**: document list, pretty printed with 4-space indentation,
//!   non-ASCII left unescaped
//! - **CSV**: header row plus one row per record, `\n` terminated

mod error;
mod json;
mod table;

pub use error::{OutputError, Result};
pub use json::{JSON_INDENT, write_documents, write_documents_json};
pub use table::{write_csv_table, write_table};
