//! Error types for reading conversion inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an input file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// The file is not valid JSON.
    #[error("{path} is not valid JSON: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A data row has more cells than the header names.
    #[error("row {row} of {path} has {cells} cells but the header names {columns}")]
    RowTooWide {
        path: PathBuf,
        row: usize,
        cells: usize,
        columns: usize,
    },

    /// Valid JSON, but not an array of objects.
    #[error("{path} is not a list of records: {reason}")]
    NotADocumentList { path: PathBuf, reason: String },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// True for malformed structured input (JSON syntax or shape).
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::JsonParse { .. } | Self::NotADocumentList { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
