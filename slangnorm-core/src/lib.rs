// slangnorm-core/src/lib.rs
//! # Slangnorm Core Library
//!
//! `slangnorm-core` provides the fundamental, platform-independent logic for
//! normalizing informal text: expanding slang, teencode, and abbreviations
//! into their canonical forms using a static translation table. It defines
//! the core data structure for translation tables, provides a mechanism for
//! compiling table keys into an efficient literal matcher, and implements a
//! pluggable `TextTransform` trait for applying replacement logic.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text based on a table constructed once up front,
//! without concerns for I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `table`: Defines the `TranslationTable` mapping surface forms to replacements.
//! * `compiler`: Compiles table keys into a cached, literal-matching alternation.
//! * `engine`: Defines the `TextTransform` trait, enabling a modular design.
//! * `engines`: Contains the concrete `TextTransform` implementations.
//! * `oneshot`: Convenience wrapper for one-shot, non-interactive use.
//! * `errors`: Custom error types for clear error reporting.
//!
//! ## The two strategies
//!
//! Two replacement strategies coexist deliberately, sharing one table type
//! and one set of invariants:
//!
//! * [`Matcher`] replaces arbitrary substrings and multi-word phrases,
//!   preferring the earliest-declared key at each position.
//! * [`Normalizer`] replaces only whole whitespace-delimited words by exact
//!   lookup, never touching a partial word.
//!
//! Both are pure: whitespace, punctuation, and the casing of unmatched text
//! pass through byte-for-byte, and the input is never mutated.
//!
//! ## Usage Example
//!
//! ```rust
//! use slangnorm_core::{transform_string, Strategy, TranslationTable};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Build a translation table (declaration order matters for the
//!     //    phrase strategy's precedence).
//!     let table = TranslationTable::from_pairs([
//!         ("k", "không"),
//!         ("hem", "không"),
//!     ])?;
//!
//!     // 2. Normalize the content in a single, one-shot function call.
//!     let output = transform_string(table, "k  hem", Strategy::WholeWord)?;
//!     assert_eq!(output, "không  không");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Construction is the only fallible step. Malformed table data fails with
//! [`NormalizeError::InvalidArgument`]; the transforms themselves are
//! infallible and never return partial results.
//!
//! ## Concurrency
//!
//! Tables and engines are immutable after construction and `Send + Sync`,
//! so concurrent callers may share them freely without coordination.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod compiler;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod oneshot;
pub mod table;

/// Re-exports the translation table type mapping surface forms to replacements.
pub use table::TranslationTable;

/// Re-exports the custom error type for clear error reporting.
pub use errors::NormalizeError;

/// Re-exports the core text transformation trait.
pub use engine::TextTransform;

/// Re-exports the concrete `Matcher` and `Normalizer` implementations from
/// their respective locations.
pub use engines::phrase_engine::Matcher;
pub use engines::word_engine::Normalizer;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use oneshot::{transform_string, Strategy};

// Re-export key types from the compiler module for advanced usage.
pub use compiler::{compile_table, escape_literal, get_or_compile, CompiledMatcher};
