//! The publications file: an ordered JSON array of bibliography records.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One bibliography record.
///
/// Only `citation`, `year`, and `url` are interpreted; every other field is
/// carried through the flattened `extra` map so a rewrite never drops data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    /// Free-text citation string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    /// Publication year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Link to the published work; the field this tool populates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// All remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Publication {
    /// The citation text, or empty when the record has none.
    pub fn citation(&self) -> &str {
        self.citation.as_deref().unwrap_or("")
    }

    /// Whether the record already carries a non-empty link.
    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Read and parse the publications array. Parse failures propagate; there is
/// no partial-repair behavior for a malformed file.
pub fn load_publications(path: &Path) -> Result<Vec<Publication>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Write the full array back as pretty-printed JSON, overwriting in place.
/// Non-ASCII characters are written as-is, not escaped.
pub fn save_publications(path: &Path, publications: &[Publication]) -> Result<()> {
    let text = serde_json::to_string_pretty(publications)?;
    fs::write(path, text)?;
    Ok(())
}
