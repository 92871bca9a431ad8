//! Field classification: a fixed lookup from field name to [`FieldKind`].
//!
//! Classification is decided by field name only, never by the shape of the
//! observed value. Names that are not listed are [`FieldKind::Text`].
//!
//! A classification can be loaded from a TOML file:
//!
//! ```toml
//! [fields]
//! value = "float"
//! usageLimit = "integer"
//! validFrom = "timestamp"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::enums::FieldKind;
use crate::error::{ClassificationError, Result};

/// Built-in voucher field table.
pub const DEFAULT_FIELDS: &[(&str, FieldKind)] = &[
    ("value", FieldKind::Float),
    ("minOrderAmount", FieldKind::Float),
    ("usageLimit", FieldKind::Integer),
    ("validFrom", FieldKind::Timestamp),
    ("validUntil", FieldKind::Timestamp),
];

#[derive(Debug, Deserialize)]
struct ClassificationFile {
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

/// Mapping from field name to its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClassification {
    fields: BTreeMap<String, FieldKind>,
}

impl Default for FieldClassification {
    fn default() -> Self {
        let mut classification = Self::empty();
        for (name, kind) in DEFAULT_FIELDS {
            classification.fields.insert((*name).to_string(), *kind);
        }
        classification
    }
}

impl FieldClassification {
    /// A classification where every field is text.
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add or replace the kind of one field.
    #[must_use]
    pub fn with_field(mut self, name: impl AsRef<str>, kind: FieldKind) -> Self {
        self.fields.insert(name.as_ref().trim().to_string(), kind);
        self
    }

    /// Kind of the given field, `Text` when unlisted.
    pub fn kind_of(&self, name: &str) -> FieldKind {
        self.fields.get(name).copied().unwrap_or_default()
    }

    /// Explicitly classified fields, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldKind)> {
        self.fields.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a classification from TOML text.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        let file: ClassificationFile =
            toml::from_str(contents).map_err(|source| ClassificationError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let mut classification = Self::empty();
        for (name, kind) in file.fields {
            let name = name.trim();
            if name.is_empty() {
                return Err(ClassificationError::Invalid(
                    "field name must not be empty".to_string(),
                ));
            }
            let kind = kind
                .parse::<FieldKind>()
                .map_err(|message| ClassificationError::Invalid(format!("{name}: {message}")))?;
            classification.fields.insert(name.to_string(), kind);
        }
        Ok(classification)
    }

    /// Load a classification from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ClassificationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }
}
