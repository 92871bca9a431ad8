//! JSON document-list reading.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tabconv_model::Document;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a JSON file holding an array of objects.
///
/// An empty array is returned as an empty list; deciding what that means is
/// up to the caller.
pub fn read_documents(path: &Path) -> Result<Vec<Document>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::from_io(path, source))?;
    let documents = parse_documents(&contents, path)?;
    debug!(path = %path.display(), documents = documents.len(), "read json documents");
    Ok(documents)
}

/// Parse JSON text holding an array of objects. `path` is used for errors.
pub fn parse_documents(contents: &str, path: &Path) -> Result<Vec<Document>> {
    let value: Value = serde_json::from_str(contents.trim_start_matches('\u{feff}')).map_err(
        |source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        },
    )?;
    let Value::Array(items) = value else {
        return Err(IngestError::NotADocumentList {
            path: path.to_path_buf(),
            reason: format!("expected an array, found {}", value_kind(&value)),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(document) => Ok(document),
            other => Err(IngestError::NotADocumentList {
                path: path.to_path_buf(),
                reason: format!("element {index} is {}, not an object", value_kind(&other)),
            }),
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Vec<Document>> {
        parse_documents(contents, Path::new("input.json"))
    }

    #[test]
    fn keeps_key_order() {
        let docs = parse(r#"[{"b": 1, "a": null, "c": "x"}]"#).unwrap();
        let keys: Vec<&str> = docs[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse("[{").unwrap_err();
        assert!(matches!(err, IngestError::JsonParse { .. }));
        assert!(err.is_unparseable());
    }

    #[test]
    fn rejects_non_array_and_non_object_elements() {
        let err = parse(r#"{"a": 1}"#).unwrap_err();
        assert!(err.to_string().contains("expected an array, found an object"));

        let err = parse(r#"[{"a": 1}, 2]"#).unwrap_err();
        assert!(err.to_string().contains("element 1 is a number"));
    }

    #[test]
    fn tolerates_byte_order_mark() {
        let docs = parse("\u{feff}[{\"a\": 1}]").unwrap();
        assert_eq!(docs.len(), 1);
    }
}
