//! Translation table management for `slangnorm-core`.
//!
//! This module defines the core data structure mapping surface forms (slang,
//! teencode, contractions) to their canonical replacements. It handles
//! deserialization of JSON dictionaries and validates table integrity on
//! construction.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::errors::NormalizeError;

/// An immutable mapping of surface-form text to its canonical replacement.
///
/// Entry order is the declaration order of the source data and is preserved:
/// it governs match precedence when the pattern compiler folds the keys into
/// a single alternation (earlier keys win on same-position overlaps). Exact
/// lookups go through a hash index, so word-by-word normalization stays O(1)
/// per word.
///
/// The table is read-only after construction; concurrent use from multiple
/// threads needs no coordination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TranslationTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, String>,
}

impl Hash for TranslationTable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The index is derived from the entries, so hashing the ordered
        // entries alone keeps the hash stable and order-sensitive.
        for (surface, replacement) in &self.entries {
            surface.hash(state);
            replacement.hash(state);
        }
        self.entries.len().hash(state);
    }
}

impl TranslationTable {
    /// Builds a table from `(surface, replacement)` pairs, preserving their
    /// order as the declaration order.
    ///
    /// Fails with [`NormalizeError::InvalidArgument`] on an empty key or a
    /// duplicate key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut index: HashMap<String, String> = HashMap::new();

        for (surface, replacement) in pairs {
            let surface = surface.into();
            let replacement = replacement.into();

            if surface.is_empty() {
                return Err(NormalizeError::InvalidArgument(
                    "translation table keys must be non-empty".to_string(),
                ));
            }
            if index.contains_key(&surface) {
                return Err(NormalizeError::InvalidArgument(format!(
                    "duplicate translation table key: '{}'",
                    surface
                )));
            }

            index.insert(surface.clone(), replacement.clone());
            entries.push((surface, replacement));
        }

        debug!("Constructed translation table with {} entries.", entries.len());
        Ok(Self { entries, index })
    }

    /// Parses a table from a JSON document.
    ///
    /// The document must be a JSON object whose values are all strings; the
    /// object's key order becomes the declaration order. Anything else
    /// (`null`, a number, an array, a bare string, non-string values) fails
    /// with [`NormalizeError::InvalidArgument`]. An empty object `{}` is a
    /// valid empty table.
    pub fn from_json_str(data: &str) -> Result<Self, NormalizeError> {
        serde_json::from_str(data).map_err(|e| {
            NormalizeError::InvalidArgument(format!(
                "translation table must be a JSON object of string values: {}",
                e
            ))
        })
    }

    /// Looks up the replacement for an exact surface form.
    pub fn get(&self, surface: &str) -> Option<&str> {
        self.index.get(surface).map(String::as_str)
    }

    /// Iterates over the surface forms in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(surface, _)| surface.as_str())
    }

    /// Iterates over `(surface, replacement)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(surface, replacement)| (surface.as_str(), replacement.as_str()))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for TranslationTable {
    type Error = NormalizeError;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut pairs = Vec::with_capacity(object.len());
        for (surface, value) in object {
            match value {
                Value::String(replacement) => pairs.push((surface, replacement)),
                other => {
                    return Err(NormalizeError::InvalidArgument(format!(
                        "replacement for key '{}' must be a string, got: {}",
                        surface, other
                    )))
                }
            }
        }
        Self::from_pairs(pairs)
    }
}
