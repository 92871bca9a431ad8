//! Type-safe enumerations for field classification and conversion direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target kind of a field, decided by its name only.
///
/// - **Float**: numeric, parsed as `f64` after removing thousands separators
/// - **Integer**: numeric, parsed as `i64` after removing thousands separators
/// - **Timestamp**: ISO 8601 local date-time that gets a `Z` (UTC) suffix
/// - **Text**: trimmed string, passed through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Float,
    Integer,
    Timestamp,
    #[default]
    Text,
}

impl FieldKind {
    /// Returns the lowercase name used in classification files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Float => "float",
            FieldKind::Integer => "integer",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Text => "text",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// Parse a kind name (case-insensitive). Accepts a few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "float" | "double" | "decimal" => Ok(FieldKind::Float),
            "integer" | "int" => Ok(FieldKind::Integer),
            "timestamp" | "datetime" => Ok(FieldKind::Timestamp),
            "text" | "string" => Ok(FieldKind::Text),
            _ => Err(format!("Unknown field kind: {s}")),
        }
    }
}

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// CSV table to JSON document list.
    CsvToJson,
    /// JSON document list to CSV table.
    JsonToCsv,
}

impl Direction {
    /// Input file used when the user does not name one.
    pub fn default_input(&self) -> &'static str {
        match self {
            Direction::CsvToJson => "voucher_test_cases.csv",
            Direction::JsonToCsv => "voucher_test_cases.json",
        }
    }

    /// Output file used when the user does not name one.
    pub fn default_output(&self) -> &'static str {
        match self {
            Direction::CsvToJson => "new_voucher_test_cases.json",
            Direction::JsonToCsv => "new_voucher_test_cases.csv",
        }
    }

    /// Format label of the input side (`CSV` or `JSON`).
    pub fn input_format(&self) -> &'static str {
        match self {
            Direction::CsvToJson => "CSV",
            Direction::JsonToCsv => "JSON",
        }
    }

    /// Format label of the output side (`CSV` or `JSON`).
    pub fn output_format(&self) -> &'static str {
        match self {
            Direction::CsvToJson => "JSON",
            Direction::JsonToCsv => "CSV",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input_format(), self.output_format())
    }
}
