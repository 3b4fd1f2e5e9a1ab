// slangnorm-core/tests/normalizer_tests.rs
use anyhow::Result;
use test_log::test; // For integrating with `env_logger` in tests

use slangnorm_core::{Normalizer, TextTransform, TranslationTable};

// A small slice of the teencode/contraction dictionary, enough to exercise
// word-level normalization end to end.
fn dictionary() -> TranslationTable {
    TranslationTable::from_pairs([
        ("k", "không"),
        ("hem", "không"),
        ("bít", "biết"),
        ("can't", "can not"),
        ("won't", "will not"),
        ("i'm", "I am"),
        ("couldn't've", "could not have"),
        ("how'd", "how did"),
    ])
    .unwrap()
}

#[test]
fn test_replaces_teencode_word() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("hem biết"), "không biết");
}

#[test]
fn test_replaces_single_character_teencode() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("k biết"), "không biết");
}

#[test]
fn test_replaces_multiple_teencode_words() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("k hem"), "không không");
}

#[test]
fn test_leaves_unknown_words_unchanged() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("hello world"), "hello world");
}

#[test]
fn test_mixed_teencode_and_normal_text() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("tôi hem bít"), "tôi không biết");
}

#[test]
fn test_expands_english_contractions() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("can't"), "can not");
    assert_eq!(normalizer.normalize("won't"), "will not");
    assert_eq!(normalizer.normalize("i'm"), "I am");
}

#[test]
fn test_expands_complex_contractions() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("couldn't've"), "could not have");
}

#[test]
fn test_expands_contraction_within_sentence() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(
        normalizer.normalize("how'd you do that"),
        "how did you do that"
    );
}

#[test]
fn test_handles_empty_string() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize(""), "");
}

#[test]
fn test_handles_string_with_only_spaces() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("   "), "   ");
}

#[test]
fn test_preserves_repeated_spaces() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("k  hem"), "không  không");
}

#[test]
fn test_preserves_newlines_and_tabs() {
    let normalizer = Normalizer::new(dictionary());
    assert_eq!(normalizer.normalize("k\nhem"), "không\nkhông");
    assert_eq!(normalizer.normalize("k\them"), "không\tkhông");
}

#[test]
fn test_whole_word_matching_only() -> Result<()> {
    let normalizer = Normalizer::new(dictionary());
    // A word containing a key is not partially replaced.
    assert_eq!(normalizer.normalize("hemm"), "hemm");
    // Trailing punctuation makes it a different word.
    assert_eq!(normalizer.normalize("hem,"), "hem,");

    // A word that is a proper substring of a key is not replaced either.
    let table = TranslationTable::from_pairs([("couldn't've", "could not have")])?;
    let normalizer = Normalizer::new(table);
    assert_eq!(normalizer.normalize("couldn't"), "couldn't");
    Ok(())
}

#[test]
fn test_empty_table_is_identity() {
    let normalizer = Normalizer::new(TranslationTable::default());
    let text = "k  hem\nbít";
    assert_eq!(normalizer.normalize(text), text);
}

#[test]
fn test_usable_behind_trait_object() {
    let engine: Box<dyn TextTransform> = Box::new(Normalizer::new(dictionary()));
    assert_eq!(engine.transform("k biết"), "không biết");
}
