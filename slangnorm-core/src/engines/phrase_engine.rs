// slangnorm-core/src/engines/phrase_engine.rs
//! A `TextTransform` implementation that replaces arbitrary substrings and
//! multi-word phrases using a compiled key alternation.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use regex::Captures;
use std::sync::Arc;

use crate::compiler::{get_or_compile, CompiledMatcher};
use crate::engine::TextTransform;
use crate::table::TranslationTable;

/// Substring and phrase matcher over a translation table.
///
/// Scans the text left to right in a single pass. At each position the
/// earliest-declared key that matches wins, the matched span is replaced
/// with its table value, and scanning resumes past the span. Text not
/// covered by any match is copied through unchanged.
///
/// Unlike [`Normalizer`](crate::engines::word_engine::Normalizer), a key may
/// match in the middle of a word or across whitespace.
#[derive(Debug)]
pub struct Matcher {
    compiled: Arc<CompiledMatcher>,
    table: TranslationTable,
}

impl Matcher {
    /// Compiles (or fetches from the cache) a matcher for `table`.
    pub fn new(table: TranslationTable) -> Result<Self> {
        let compiled = get_or_compile(&table)
            .context("Failed to compile translation table for Matcher")?;

        Ok(Self { compiled, table })
    }

    /// Replaces every occurrence of every table key in `text`.
    ///
    /// Produces a new string; with an empty table this is the identity.
    pub fn apply(&self, text: &str) -> String {
        match self.compiled.pattern() {
            Some(pattern) => pattern
                .replace_all(text, |caps: &Captures| {
                    let matched = &caps[0];
                    // The pattern only ever matches table keys, but fall
                    // back to the matched text rather than panic.
                    self.table
                        .get(matched)
                        .map(str::to_owned)
                        .unwrap_or_else(|| matched.to_owned())
                })
                .into_owned(),
            None => text.to_owned(),
        }
    }

    /// Returns the table this matcher was compiled from.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}

impl TextTransform for Matcher {
    fn transform(&self, text: &str) -> String {
        self.apply(text)
    }
}
