//! Header-first CSV reading.

use std::fs::File;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{IngestError, Result};

/// A CSV table: header names plus the raw (untrimmed) cells of each row.
///
/// Rows may be shorter than the header, never longer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Raw cell at `row`/`column`, `None` past the end of a short row.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn is_blank_record(record: &StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record[0].is_empty())
}

/// Read a CSV file whose first non-blank row names the fields.
///
/// Cells are kept verbatim; only header names are trimmed. A file with no
/// rows at all gives an empty table. A row with more cells than the header
/// is an error, so no cell is ever lost.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| IngestError::from_io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut table = CsvTable::default();
    let mut saw_header = false;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if is_blank_record(&record) {
            continue;
        }
        if !saw_header {
            table.headers = record.iter().map(normalize_header).collect();
            saw_header = true;
            continue;
        }
        if record.len() > table.headers.len() {
            return Err(IngestError::RowTooWide {
                path: path.to_path_buf(),
                row: table.rows.len() + 1,
                cells: record.len(),
                columns: table.headers.len(),
            });
        }
        table.rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}
