// slangnorm-core/src/oneshot.rs

//! `oneshot.rs`
//! Convenience wrappers for one-shot, non-interactive normalization.
//! Provides a helper for a full transformation of a string without keeping
//! an engine around.
//!
//! Supports selecting between the substring/phrase matcher and the
//! whole-word normalizer.

use anyhow::Result;

use crate::engine::TextTransform;
use crate::engines::phrase_engine::Matcher;
use crate::engines::word_engine::Normalizer;
use crate::table::TranslationTable;

/// Enum to select which matching strategy a one-shot transform uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Substring and multi-word phrase matching via the compiled alternation.
    Phrase,
    /// Whole-word exact matching on whitespace-delimited runs.
    WholeWord,
}

/// Fully normalizes an input string with the selected strategy.
/// This function is the primary entry point for one-shot use.
///
/// # Arguments
///
/// * `table` - The translation table of surface-form to replacement pairs.
/// * `text` - The string to be normalized.
/// * `strategy` - Which strategy to use (`Phrase` or `WholeWord`).
pub fn transform_string(
    table: TranslationTable,
    text: &str,
    strategy: Strategy,
) -> Result<String> {
    // Dynamically instantiate the selected engine behind the TextTransform trait.
    let engine: Box<dyn TextTransform> = match strategy {
        Strategy::Phrase => Box::new(Matcher::new(table)?),
        Strategy::WholeWord => Box::new(Normalizer::new(table)),
    };

    Ok(engine.transform(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn teencode_table() -> TranslationTable {
        TranslationTable::from_pairs([("k", "không"), ("hem", "không"), ("bít", "biết")])
            .unwrap()
    }

    #[test]
    fn test_transform_string_whole_word() -> Result<()> {
        let output = transform_string(teencode_table(), "hem biết", Strategy::WholeWord)?;
        assert_eq!(output, "không biết");
        Ok(())
    }

    #[test]
    fn test_transform_string_phrase() -> Result<()> {
        let table =
            TranslationTable::from_pairs([("can't", "can not"), ("i'm", "I am")]).unwrap();
        let output = transform_string(table, "i'm sure it can't rain", Strategy::Phrase)?;
        assert_eq!(output, "I am sure it can not rain");
        Ok(())
    }

    #[test]
    fn test_strategies_diverge_on_embedded_keys() -> Result<()> {
        // Phrase matching replaces inside words; whole-word matching does not.
        let table = teencode_table();
        let phrase = transform_string(table.clone(), "ok k", Strategy::Phrase)?;
        let word = transform_string(table, "ok k", Strategy::WholeWord)?;
        assert_eq!(phrase, "okhông không");
        assert_eq!(word, "ok không");
        Ok(())
    }

    #[test]
    fn test_empty_input_is_identity() -> Result<()> {
        assert_eq!(transform_string(teencode_table(), "", Strategy::Phrase)?, "");
        assert_eq!(
            transform_string(teencode_table(), "", Strategy::WholeWord)?,
            ""
        );
        Ok(())
    }
}
