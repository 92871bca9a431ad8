//! Flattening of documents into CSV rows (reverse direction).

use serde_json::Value;
use tabconv_model::Document;

/// Column header taken from a document's keys, in key order.
pub fn header_from_document(document: &Document) -> Vec<String> {
    document.keys().cloned().collect()
}

/// Natural text of a JSON value for a CSV cell.
///
/// `null` is the empty string, strings are written verbatim, numbers and
/// booleans use their JSON form, and arrays/objects are compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// A document projected onto `header`.
///
/// Keys missing from the document give empty cells. Returns the row and the
/// number of keys that are not part of the header (dropped).
pub fn flatten_document(document: &Document, header: &[String]) -> (Vec<String>, usize) {
    let row = header
        .iter()
        .map(|column| document.get(column).map(cell_text).unwrap_or_default())
        .collect();
    let dropped = document
        .keys()
        .filter(|key| !header.iter().any(|column| column == *key))
        .count();
    (row, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn header_keeps_key_order() {
        let doc = document(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        assert_eq!(header_from_document(&doc), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn cell_text_forms() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("héllo")), "héllo");
        assert_eq!(cell_text(&json!(1000.0)), "1000.0");
        assert_eq!(cell_text(&json!(5)), "5");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!([1, "a"])), r#"[1,"a"]"#);
        assert_eq!(cell_text(&json!({"k": null})), r#"{"k":null}"#);
    }

    #[test]
    fn cell_text_keeps_integers_beyond_64_bits() {
        let big: Value = serde_json::from_str("12345678901234567890123").unwrap();
        assert_eq!(cell_text(&big), "12345678901234567890123");
    }

    #[test]
    fn missing_keys_are_empty_and_extra_keys_dropped() {
        let header = vec!["name".to_string(), "value".to_string()];
        let doc = document(json!({"value": null, "extra": "x", "other": 1}));
        let (row, dropped) = flatten_document(&doc, &header);
        assert_eq!(row, vec!["", ""]);
        assert_eq!(dropped, 2);
    }
}
