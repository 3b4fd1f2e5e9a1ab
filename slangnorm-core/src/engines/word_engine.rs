// slangnorm-core/src/engines/word_engine.rs
//! A `TextTransform` implementation that replaces whole whitespace-delimited
//! words via exact table lookup.
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::engine::TextTransform;
use crate::table::TranslationTable;

// Maximal runs of non-whitespace characters.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// Whole-word normalizer over a translation table.
///
/// Splits the text into maximal non-whitespace runs and replaces a run only
/// when the entire run is a table key. Every separator passes through
/// byte-for-byte, so repeated spaces, tabs, and newlines survive in their
/// original positions. There is no partial-word replacement: a word that
/// merely contains a key, or is a proper substring of one, is left alone.
#[derive(Debug, Clone)]
pub struct Normalizer {
    table: TranslationTable,
}

impl Normalizer {
    /// Builds a normalizer over `table`. No compilation step is needed;
    /// lookups are exact.
    pub fn new(table: TranslationTable) -> Self {
        Self { table }
    }

    /// Normalizes `text` word by word.
    ///
    /// Words absent from the table are left untouched; the result has the
    /// same word/separator segmentation as the input.
    pub fn normalize(&self, text: &str) -> String {
        WORD.replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            self.table.get(word).unwrap_or(word).to_owned()
        })
        .into_owned()
    }

    /// Returns the table backing this normalizer.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}

impl TextTransform for Normalizer {
    fn transform(&self, text: &str) -> String {
        self.normalize(text)
    }
}
