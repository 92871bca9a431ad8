//! Forward conversion: CSV table to JSON document list.

use std::path::Path;

use tabconv_ingest::{CsvTable, read_csv_table};
use tabconv_model::{ConvertOptions, Document, FieldKind, NormalizedValue};
use tabconv_output::write_documents_json;
use tabconv_transform::{CoercionStats, StrictViolation, ValueNormalizer, check_strict};
use tracing::{debug, info, info_span};

use crate::context::ConversionContext;
use crate::error::Result;

/// Result of a successful forward conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardReport {
    pub records: usize,
    pub stats: CoercionStats,
}

/// Normalize every row of `table` into a document.
///
/// Fields absent from a short row become `null`. A repeated header name
/// keeps its first position and takes the value of its last column; it is
/// counted once per row in the statistics. In strict mode the first value
/// that coercion left as text aborts with a [`StrictViolation`].
pub fn table_to_documents(
    table: &CsvTable,
    normalizer: ValueNormalizer<'_>,
    options: ConvertOptions,
) -> std::result::Result<(Vec<Document>, CoercionStats), StrictViolation> {
    let mut fields: Vec<(&str, FieldKind)> = Vec::new();
    let slots: Vec<usize> = table
        .headers
        .iter()
        .map(|field| {
            let existing = fields.iter().position(|(name, _)| *name == field.as_str());
            existing.unwrap_or_else(|| {
                fields.push((field.as_str(), normalizer.kind_of(field)));
                fields.len() - 1
            })
        })
        .collect();
    let mut stats = CoercionStats::default();
    for (field, kind) in &fields {
        stats.entry(field, *kind);
    }

    let mut documents = Vec::with_capacity(table.rows.len());
    for (row_index, row) in table.rows.iter().enumerate() {
        let mut values = vec![NormalizedValue::Absent; fields.len()];
        for (column, slot) in slots.iter().enumerate() {
            let (field, kind) = fields[*slot];
            let value = tabconv_transform::normalize_value(
                kind,
                row.get(column).map(String::as_str),
            );
            if options.is_strict()
                && let Some(text) = check_strict(kind, &value)
            {
                return Err(StrictViolation {
                    row: row_index + 1,
                    field: field.to_string(),
                    kind,
                    value: text,
                });
            }
            values[*slot] = value;
        }
        let mut document = Document::new();
        for ((field, kind), value) in fields.iter().zip(values) {
            stats.entry(field, *kind).record(&value);
            document.insert((*field).to_string(), value.into_json());
        }
        documents.push(document);
    }
    Ok((documents, stats))
}

/// Read `input` as CSV, normalize it, and write the documents to `output`.
///
/// Nothing is written unless the whole input was read and normalized.
pub fn convert_csv_to_json(
    input: &Path,
    output: &Path,
    context: &ConversionContext,
) -> Result<ForwardReport> {
    let span = info_span!(
        "csv_to_json",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();

    let table = read_csv_table(input)?;
    let normalizer = ValueNormalizer::new(&context.classification);
    let (documents, stats) = table_to_documents(&table, normalizer, context.options)?;
    debug!(
        records = documents.len(),
        unchanged = stats.total_unchanged(),
        "normalized rows"
    );

    write_documents_json(output, &documents)?;
    info!(records = documents.len(), "csv converted to json");
    Ok(ForwardReport {
        records: documents.len(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabconv_model::FieldClassification;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().copied().map(String::from).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().copied().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn normalizes_voucher_row() {
        let fields = FieldClassification::default();
        let table = table(
            &["name", "value", "validFrom"],
            &[&["A", "1,000", "2024-01-01T00:00:00"]],
        );
        let (documents, stats) =
            table_to_documents(&table, ValueNormalizer::new(&fields), ConvertOptions::new())
                .unwrap();
        assert_eq!(
            serde_json::Value::Object(documents[0].clone()),
            json!({"name": "A", "value": 1000.0, "validFrom": "2024-01-01T00:00:00Z"})
        );
        assert_eq!(stats.get("value").unwrap().coerced, 1);
    }

    #[test]
    fn short_rows_fill_with_null() {
        let fields = FieldClassification::default();
        let table = table(&["name", "usageLimit", "note"], &[&["A"]]);
        let (documents, stats) =
            table_to_documents(&table, ValueNormalizer::new(&fields), ConvertOptions::new())
                .unwrap();
        assert_eq!(
            serde_json::Value::Object(documents[0].clone()),
            json!({"name": "A", "usageLimit": null, "note": null})
        );
        assert_eq!(stats.get("usageLimit").unwrap().absent, 1);
    }

    #[test]
    fn duplicate_headers_keep_first_position_and_last_value() {
        let fields = FieldClassification::empty();
        let table = table(&["a", "b", "a"], &[&["1", "2", "3"]]);
        let (documents, _) =
            table_to_documents(&table, ValueNormalizer::new(&fields), ConvertOptions::new())
                .unwrap();
        let keys: Vec<&str> = documents[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(documents[0]["a"], "3");
    }

    #[test]
    fn duplicate_headers_are_counted_once_per_row() {
        let fields = FieldClassification::empty().with_field("price", FieldKind::Float);
        let table = table(
            &["price", "name", "price"],
            &[&["1", "A", "N/A"], &["2", "B", ""]],
        );
        let (documents, stats) =
            table_to_documents(&table, ValueNormalizer::new(&fields), ConvertOptions::new())
                .unwrap();
        assert_eq!(documents[0]["price"], "N/A");
        assert!(documents[1]["price"].is_null());
        assert_eq!(stats.fields().len(), 2);
        let price = stats.get("price").unwrap();
        assert_eq!(price.total(), 2);
        assert_eq!(price.unchanged, 1);
        assert_eq!(price.absent, 1);
        assert_eq!(price.coerced, 0);
    }

    #[test]
    fn strict_mode_reports_row_and_field() {
        let fields = FieldClassification::empty().with_field("price", FieldKind::Float);
        let table = table(&["name", "price"], &[&["A", "1.5"], &["B", "N/A"]]);
        let violation =
            table_to_documents(&table, ValueNormalizer::new(&fields), ConvertOptions::strict())
                .unwrap_err();
        assert_eq!(violation.row, 2);
        assert_eq!(violation.field, "price");
        assert_eq!(violation.value, "N/A");
    }

    #[test]
    fn lenient_mode_keeps_unparseable_text() {
        let fields = FieldClassification::empty().with_field("price", FieldKind::Float);
        let table = table(&["price"], &[&["N/A"]]);
        let (documents, stats) =
            table_to_documents(&table, ValueNormalizer::new(&fields), ConvertOptions::new())
                .unwrap();
        assert_eq!(documents[0]["price"], "N/A");
        assert_eq!(stats.total_unchanged(), 1);
    }
}
