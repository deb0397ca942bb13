//! Local simplifier — the rule-based path used when the language model is unavailable.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::simplifier::lexicon::Lexicon;
use crate::simplifier::reading_level::ReadingLevel;
use crate::simplifier::rewrite::simplify_text;
use crate::simplifier::vocabulary::{extract_vocabulary, VocabularyEntry};

/// Sentences kept by the extractive summary.
const SUMMARY_SENTENCES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplificationResult {
    pub simplified_text: String,
    pub vocabulary: Vec<VocabularyEntry>,
}

/// Rule-based simplifier over an injected, immutable lexicon.
///
/// Cheap to clone; every call works only on its own arguments.
#[derive(Debug, Clone)]
pub struct LocalSimplifier {
    lexicon: Arc<Lexicon>,
}

impl LocalSimplifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn simplify(&self, text: &str, level: ReadingLevel) -> String {
        let tables = self.lexicon.tables(level);
        simplify_text(text, &tables.replacements, &tables.restructure)
    }

    pub fn extract_vocabulary(&self, text: &str, level: ReadingLevel) -> Vec<VocabularyEntry> {
        extract_vocabulary(text, level, &self.lexicon.tables(level).definitions)
    }

    /// Simplifies `text` and extracts vocabulary from the original (not the rewrite).
    pub fn process(&self, text: &str, level: ReadingLevel) -> SimplificationResult {
        SimplificationResult {
            simplified_text: self.simplify(text, level),
            vocabulary: self.extract_vocabulary(text, level),
        }
    }
}

/// First two sentences of `text`, split on `.`, `!` or `?` followed by whitespace.
pub fn extractive_summary(text: &str) -> String {
    let mut sentences = 0;
    let mut end = text.len();
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                sentences += 1;
                if sentences == SUMMARY_SENTENCES {
                    end = i + c.len_utf8();
                    break;
                }
            }
        }
    }

    text[..end].trim().to_string()
}
