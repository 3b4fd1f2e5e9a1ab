// slangnorm-core/src/engine.rs
//! Defines the core TextTransform trait shared by both matching strategies.
//!
//! The `TextTransform` trait provides a pluggable interface for the two
//! replacement strategies (substring/phrase matching and whole-word
//! matching). This module defines the contract that both engines adhere to,
//! ensuring a consistent and interchangeable core API.
//!
//! License: MIT OR APACHE 2.0

/// A trait that defines the core functionality of a text transformation engine.
///
/// This trait decouples callers from the specific matching strategy, allowing
/// the phrase matcher and the whole-word normalizer to be used
/// interchangeably behind one seam.
pub trait TextTransform: Send + Sync {
    /// Produces the normalized form of `text`.
    ///
    /// The transform is pure: the input is never mutated, and every span of
    /// text not covered by a table match passes through byte-for-byte,
    /// including whitespace, punctuation, and line breaks.
    fn transform(&self, text: &str) -> String;
}
