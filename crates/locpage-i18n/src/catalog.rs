//! Locale catalog model and parsing
//!
//! A catalog file is a flat JSON object of string keys to string values. A
//! key `greeting` may carry a plural companion under `greeting_plural`; the
//! pair becomes a single entry with both variants.

use crate::error::{I18nError, I18nResult};
use serde_json::Value;
use tracing::warn;

/// Suffix marking the plural companion of a catalog key
const PLURAL_SUFFIX: &str = "_plural";

/// One translated string, with an optional plural variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The symbolic key from the locale file
    pub key: String,
    /// The singular display string
    pub singular: String,
    /// The plural display string, when the file carries a `_plural` companion
    pub plural: Option<String>,
}

/// The translated strings for one locale, in file order
///
/// Entries keep the order they appear in the locale file so that lookups by
/// singular value resolve deterministically when two entries share a display
/// string. Catalogs are tiny; lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse a catalog from the JSON text of a locale file
    ///
    /// `path` is only used to label errors. Duplicate keys are tolerated:
    /// the last occurrence wins for the value while the entry keeps its
    /// first-occurrence position. A `_plural` key with no base entry is
    /// ignored with a warning.
    pub fn from_json_str(path: &str, content: &str) -> I18nResult<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| I18nError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        let map = value.as_object().ok_or_else(|| I18nError::ParseError {
            path: path.to_string(),
            message: "expected a top-level JSON object".to_string(),
        })?;

        // serde_json is built with `preserve_order`, so iteration follows
        // file order and a duplicated key holds its last value.
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let Some(text) = value.as_str() else {
                return Err(I18nError::ParseError {
                    path: path.to_string(),
                    message: format!("value for key '{key}' is not a string"),
                });
            };

            if let Some(base) = key.strip_suffix(PLURAL_SUFFIX) {
                if map.contains_key(base) {
                    // Consumed as the plural companion of its base entry
                    continue;
                }
                warn!(key = %key, path = %path, "plural entry has no base key, ignoring");
                continue;
            }

            let plural = map
                .get(&format!("{key}{PLURAL_SUFFIX}"))
                .and_then(Value::as_str)
                .map(str::to_owned);

            entries.push(CatalogEntry {
                key: key.clone(),
                singular: text.to_owned(),
                plural,
            });
        }

        Ok(Self { entries })
    }

    /// Look up an entry by its symbolic key
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Find the first entry whose singular value equals `singular`
    ///
    /// First match in file order, so duplicated display strings resolve
    /// deterministically.
    pub fn find_by_singular(&self, singular: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.singular == singular)
    }

    /// All entries in file order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
