use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a field classification.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("failed to read classification file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse classification file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid classification: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ClassificationError>;
