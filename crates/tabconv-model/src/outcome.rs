//! User-facing outcome of one conversion.

use serde::{Deserialize, Serialize};

/// Final status of a directional operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionStatus {
    /// Output file written.
    Success,
    /// Input held no records; no output file was produced.
    NothingToWrite,
    /// The operation aborted; the message says why.
    Failed,
}

impl ConversionStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConversionStatus::Success | ConversionStatus::NothingToWrite => 0,
            ConversionStatus::Failed => 1,
        }
    }
}

/// Status plus a human-readable line, returned to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    pub status: ConversionStatus,
    pub message: String,
    pub records: usize,
}

impl ConversionOutcome {
    pub fn success(records: usize, message: impl Into<String>) -> Self {
        Self {
            status: ConversionStatus::Success,
            message: message.into(),
            records,
        }
    }

    pub fn nothing_to_write(message: impl Into<String>) -> Self {
        Self {
            status: ConversionStatus::NothingToWrite,
            message: message.into(),
            records: 0,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ConversionStatus::Failed,
            message: message.into(),
            records: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }
}
