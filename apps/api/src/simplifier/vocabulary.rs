//! Vocabulary extraction — picks long words from the source text and explains them.

use serde::{Deserialize, Serialize};

use crate::simplifier::lexicon::DefinitionTable;
use crate::simplifier::reading_level::ReadingLevel;

/// Never return more than this many entries.
pub const MAX_VOCABULARY_ENTRIES: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
    pub example: String,
    pub difficulty: Difficulty,
}

/// Extracts up to five vocabulary entries from `text`.
///
/// Algorithm:
/// 1. Split on whitespace.
/// 2. Keep only word characters (alphanumeric and `_`) of each token.
/// 3. Keep tokens strictly longer than the level threshold (counted in chars).
/// 4. Take the first five in source order. Repeats are kept.
/// 5. Attach the canned definition, or a generic one when the word is unknown.
pub fn extract_vocabulary(
    text: &str,
    level: ReadingLevel,
    definitions: &DefinitionTable,
) -> Vec<VocabularyEntry> {
    let min_len = level.min_word_length();
    let difficulty = level.difficulty();

    text.split_whitespace()
        .map(strip_non_word)
        .filter(|word| word.chars().count() > min_len)
        .take(MAX_VOCABULARY_ENTRIES)
        .map(|word| {
            let (definition, example) = match definitions.lookup(&word) {
                Some(known) => (known.definition.clone(), known.example.clone()),
                None => (
                    format!("Definition for {word}"),
                    format!("Example sentence with {word}"),
                ),
            };
            VocabularyEntry {
                word,
                definition,
                example,
                difficulty,
            }
        })
        .collect()
}

fn strip_non_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
