use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Write a header row and `rows` as CSV into `writer`.
///
/// Records end with `\n`; fields are quoted only when needed.
pub fn write_table<W: Write>(writer: W, header: &[String], rows: &[Vec<String>]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a CSV table to `path`, replacing it if it exists.
pub fn write_csv_table(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_table(file, header, rows).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "wrote csv table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(header: &[&str], rows: &[&[&str]]) -> String {
        let header: Vec<String> = header.iter().copied().map(String::from).collect();
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().copied().map(String::from).collect())
            .collect();
        let mut buffer = Vec::new();
        write_table(&mut buffer, &header, &rows).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_cells_and_lf_terminator() {
        assert_eq!(render(&["name", "value"], &[&["A", ""]]), "name,value\nA,\n");
    }

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(
            render(&["name", "value"], &[&["Giảm, giá", "say \"hi\""]]),
            "name,value\n\"Giảm, giá\",\"say \"\"hi\"\"\"\n"
        );
    }
}
