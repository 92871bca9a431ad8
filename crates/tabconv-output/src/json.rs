use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tabconv_model::Document;
use tracing::debug;

use crate::error::{OutputError, Result};

/// Indentation used for pretty-printed JSON output.
pub const JSON_INDENT: &[u8] = b"    ";

/// Serialize `documents` as a pretty-printed JSON array into `writer`.
///
/// No trailing newline is written.
pub fn write_documents<W: Write>(writer: W, documents: &[Document]) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    documents.serialize(&mut serializer)
}

/// Write `documents` to a JSON file, replacing it if it exists.
pub fn write_documents_json(path: &Path, documents: &[Document]) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_documents(&mut writer, documents).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), documents = documents.len(), "wrote json documents");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(documents: &[Document]) -> String {
        let mut buffer = Vec::new();
        write_documents(&mut buffer, documents).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_list_is_brackets() {
        assert_eq!(render(&[]), "[]");
    }

    #[test]
    fn four_space_indent_and_unescaped_unicode() {
        let mut document = Document::new();
        document.insert("tên".to_string(), json!("Giảm giá"));
        document.insert("value".to_string(), json!(1000.0));
        document.insert("note".to_string(), json!(null));
        insta::assert_snapshot!(render(&[document]), @r#"
        [
            {
                "tên": "Giảm giá",
                "value": 1000.0,
                "note": null
            }
        ]
        "#);
    }
}
