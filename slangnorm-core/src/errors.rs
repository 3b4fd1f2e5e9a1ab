//! errors.rs - Custom error types for the slangnorm-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `slangnorm-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NormalizeError {
    /// Malformed caller input: a translation table that is not an object of
    /// string pairs, a duplicate key, or an empty key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The escaped key alternation failed to compile. Unreachable for
    /// correctly escaped keys, but surfaced rather than swallowed.
    #[error("Failed to compile matcher pattern: {0}")]
    MatcherCompilation(#[from] regex::Error),
}
