//! Reverse conversion: JSON document list to CSV table.

use std::path::Path;

use tabconv_ingest::read_documents;
use tabconv_model::Document;
use tabconv_output::write_csv_table;
use tabconv_transform::{flatten_document, header_from_document};
use tracing::{debug, info, info_span};

use crate::error::{ConvertError, Result};

/// Documents flattened into CSV rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTable {
    /// Keys of the first document, in its key order.
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Keys of later documents that are not in the header.
    pub dropped_keys: usize,
}

/// Result of a successful reverse conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseReport {
    pub records: usize,
    pub columns: usize,
    pub dropped_keys: usize,
}

/// Flatten `documents` into a table whose columns are the first document's
/// keys. Returns `None` when there is nothing to write (no documents, or a
/// first document without keys).
pub fn documents_to_table(documents: &[Document]) -> Option<FlatTable> {
    let header = header_from_document(documents.first()?);
    if header.is_empty() {
        return None;
    }
    let mut dropped_keys = 0;
    let rows = documents
        .iter()
        .map(|document| {
            let (row, dropped) = flatten_document(document, &header);
            dropped_keys += dropped;
            row
        })
        .collect();
    Some(FlatTable {
        header,
        rows,
        dropped_keys,
    })
}

/// Read `input` as a JSON document list and write it to `output` as CSV.
///
/// An empty list produces no output file and a [`ConvertError::EmptyInput`].
pub fn convert_json_to_csv(
    input: &Path,
    output: &Path,
) -> Result<ReverseReport> {
    let span = info_span!(
        "json_to_csv",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();

    let documents = read_documents(input)?;
    if documents.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: input.to_path_buf(),
        });
    }
    let table = documents_to_table(&documents).ok_or_else(|| ConvertError::NoColumns {
        path: input.to_path_buf(),
    })?;
    if table.dropped_keys > 0 {
        debug!(
            dropped_keys = table.dropped_keys,
            "keys outside the first record's fields were ignored"
        );
    }

    write_csv_table(output, &table.header, &table.rows)?;
    info!(records = table.rows.len(), "json converted to csv");
    Ok(ReverseReport {
        records: table.rows.len(),
        columns: table.header.len(),
        dropped_keys: table.dropped_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn documents(value: serde_json::Value) -> Vec<Document> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn header_comes_from_first_document() {
        let docs = documents(json!([
            {"name": "A", "value": null},
            {"value": 2.5, "name": "B", "extra": true}
        ]));
        let table = documents_to_table(&docs).unwrap();
        assert_eq!(table.header, vec!["name", "value"]);
        assert_eq!(table.rows, vec![vec!["A", ""], vec!["B", "2.5"]]);
        assert_eq!(table.dropped_keys, 1);
    }

    #[test]
    fn missing_keys_become_empty_cells() {
        let docs = documents(json!([{"a": 1, "b": 2}, {"a": 3}]));
        let table = documents_to_table(&docs).unwrap();
        assert_eq!(table.rows[1], vec!["3", ""]);
    }

    #[test]
    fn nothing_to_write() {
        assert_eq!(documents_to_table(&[]), None);
        assert_eq!(documents_to_table(&documents(json!([{}]))), None);
    }
}
