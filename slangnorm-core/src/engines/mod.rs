// slangnorm-core/src/engines/mod.rs
//! This module contains the concrete text transformation engines.
//!
//! Each engine is a separate file within this directory and implements the
//! `TextTransform` trait. The two strategies are deliberately distinct:
//! `phrase_engine` performs substring and multi-word phrase replacement via
//! a compiled alternation, while `word_engine` replaces only whole
//! whitespace-delimited words via exact lookup.

pub mod phrase_engine;
pub mod word_engine;
