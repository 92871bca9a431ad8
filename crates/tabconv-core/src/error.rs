use std::path::PathBuf;

use thiserror::Error;

use tabconv_ingest::IngestError;
use tabconv_model::ConversionStatus;
use tabconv_output::OutputError;
use tabconv_transform::StrictViolation;

/// Failure category of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    InputRead,
    InputUnparseable,
    EmptyInput,
    OutputWrite,
    StrictViolation,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error("{path} contains no records; nothing to write")]
    EmptyInput { path: PathBuf },
    #[error("first record in {path} has no fields; nothing to write")]
    NoColumns { path: PathBuf },
    #[error("strict mode: {0}")]
    Strict(#[from] StrictViolation),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Ingest(IngestError::FileNotFound { .. }) => ErrorKind::InputNotFound,
            Self::Ingest(err) if err.is_unparseable() => ErrorKind::InputUnparseable,
            Self::Ingest(_) => ErrorKind::InputRead,
            Self::Output(_) => ErrorKind::OutputWrite,
            Self::EmptyInput { .. } | Self::NoColumns { .. } => ErrorKind::EmptyInput,
            Self::Strict(_) => ErrorKind::StrictViolation,
        }
    }

    /// Empty input is reported as "nothing to write", everything else failed.
    pub fn status(&self) -> ConversionStatus {
        match self.kind() {
            ErrorKind::EmptyInput => ConversionStatus::NothingToWrite,
            _ => ConversionStatus::Failed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_failed_with_kind() {
        let err = ConvertError::from(IngestError::FileNotFound {
            path: PathBuf::from("vouchers.csv"),
        });
        assert_eq!(err.kind(), ErrorKind::InputNotFound);
        assert_eq!(err.status(), ConversionStatus::Failed);
        assert_eq!(err.to_string(), "file not found: vouchers.csv");
    }

    #[test]
    fn empty_input_is_nothing_to_write() {
        let err = ConvertError::EmptyInput {
            path: PathBuf::from("vouchers.json"),
        };
        assert_eq!(err.status(), ConversionStatus::NothingToWrite);
    }
}
