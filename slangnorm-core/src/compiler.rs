//! compiler.rs - Manages the compilation and caching of translation tables.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `TranslationTable` into a `CompiledMatcher`, a single alternation over
//! all escaped keys optimized for efficient replacement. It uses a global,
//! shared cache to avoid redundant compilation.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::errors::NormalizeError;
use crate::table::TranslationTable;

/// The compiled form of a translation table's key set.
///
/// Holds one pattern matching any key as literal text, with alternatives in
/// declaration order. `None` for an empty table, whose matcher degenerates
/// to the identity transform.
#[derive(Debug)]
pub struct CompiledMatcher {
    pattern: Option<Regex>,
}

impl CompiledMatcher {
    /// The underlying alternation, if the table was non-empty.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled matchers.
    /// The key is a hash of the ordered table entries.
    static ref COMPILED_MATCHER_CACHE: RwLock<HashMap<u64, Arc<CompiledMatcher>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `TranslationTable` to create a stable, unique key for the cache.
///
/// Entry order is part of the hash: two tables with the same pairs in a
/// different order compile to different matchers.
fn hash_table(table: &TranslationTable) -> u64 {
    let mut hasher = DefaultHasher::new();
    table.hash(&mut hasher);
    hasher.finish()
}

/// Escapes one table key so it matches only its exact literal text.
///
/// Covers `- ( ) [ ] { } + ? * . $ ^ | , : # < ! \` plus the backspace
/// control character. `<` and backspace are written as hex escapes: `\<` is
/// a word-boundary assertion in the regex crate, not a literal.
pub fn escape_literal(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        match ch {
            '-' | '(' | ')' | '[' | ']' | '{' | '}' | '+' | '?' | '*' | '.' | '$' | '^'
            | '|' | ',' | ':' | '#' | '!' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '<' => escaped.push_str("\\x3C"),
            '\u{0008}' => escaped.push_str("\\x08"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Compiles a table's keys into a `CompiledMatcher` for efficient matching.
/// This is the low-level function that performs the actual compilation.
///
/// The alternation keeps declaration order; combined with the regex crate's
/// leftmost-first semantics, an earlier-declared key wins whenever two keys
/// could match at the same position.
pub fn compile_table(table: &TranslationTable) -> Result<CompiledMatcher, NormalizeError> {
    debug!("Starting compilation of {} table entries.", table.len());

    if table.is_empty() {
        debug!("Empty table; matcher is the identity.");
        return Ok(CompiledMatcher { pattern: None });
    }

    let alternation = table
        .keys()
        .map(escape_literal)
        .collect::<Vec<String>>()
        .join("|");

    let pattern = RegexBuilder::new(&alternation)
        .size_limit(10 * (1 << 20)) // 10 MB limit for the compiled pattern
        .build()
        .map_err(NormalizeError::MatcherCompilation)?;

    debug!("Finished compiling alternation of {} keys.", table.len());
    Ok(CompiledMatcher {
        pattern: Some(pattern),
    })
}

/// Gets a `CompiledMatcher` instance from the cache or compiles it if not found.
///
/// This is the public entry point for retrieving compiled matchers. It returns
/// an `Arc` to a `CompiledMatcher` instance, allowing for cheap sharing.
pub fn get_or_compile(table: &TranslationTable) -> Result<Arc<CompiledMatcher>> {
    let cache_key = hash_table(table);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_MATCHER_CACHE.read().unwrap();
        if let Some(compiled) = cache.get(&cache_key) {
            debug!("Serving compiled matcher from cache for key: {}", &cache_key);
            return Ok(Arc::clone(compiled));
        }
    } // Read lock is released here.

    // Not in cache, so we compile.
    debug!("Compiled matcher not found in cache. Compiling now.");
    let compiled = Arc::new(compile_table(table)?);

    // Acquire a write lock to insert the new matcher.
    COMPILED_MATCHER_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached matcher for key: {}", &cache_key);
    Ok(compiled)
}
