//! Reading levels — the per-request tier that selects tables, thresholds and labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::simplifier::vocabulary::Difficulty;

/// Target audience for a simplification request.
///
/// Unknown or missing values resolve to `MiddleSchool` via [`ReadingLevel::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingLevel {
    #[serde(rename = "grade3")]
    Grade3,
    #[default]
    #[serde(rename = "middle-school")]
    MiddleSchool,
    #[serde(rename = "high-school")]
    HighSchool,
    #[serde(rename = "college")]
    College,
}

/// Prompt metadata describing a level to the language model.
#[derive(Debug, Clone, Copy)]
pub struct LevelProfile {
    pub grade: &'static str,
    pub description: &'static str,
    pub max_sentence_words: u32,
}

impl ReadingLevel {
    pub const ALL: [ReadingLevel; 4] = [
        ReadingLevel::Grade3,
        ReadingLevel::MiddleSchool,
        ReadingLevel::HighSchool,
        ReadingLevel::College,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Grade3 => "grade3",
            ReadingLevel::MiddleSchool => "middle-school",
            ReadingLevel::HighSchool => "high-school",
            ReadingLevel::College => "college",
        }
    }

    /// Parses a wire identifier. Returns `None` for anything unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }

    /// Resolves an optional, unvalidated identifier, defaulting to middle-school.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Vocabulary candidates must be strictly longer than this many characters.
    pub fn min_word_length(&self) -> usize {
        match self {
            ReadingLevel::Grade3 => 4,
            ReadingLevel::MiddleSchool => 6,
            ReadingLevel::HighSchool => 8,
            ReadingLevel::College => 10,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            ReadingLevel::Grade3 => Difficulty::Basic,
            ReadingLevel::MiddleSchool => Difficulty::Intermediate,
            ReadingLevel::HighSchool => Difficulty::Advanced,
            ReadingLevel::College => Difficulty::Expert,
        }
    }

    pub fn profile(&self) -> LevelProfile {
        match self {
            ReadingLevel::Grade3 => LevelProfile {
                grade: "3rd grade",
                description: "Simple sentences, common words",
                max_sentence_words: 15,
            },
            ReadingLevel::MiddleSchool => LevelProfile {
                grade: "6th-8th grade",
                description: "Clear explanations, moderate complexity",
                max_sentence_words: 25,
            },
            ReadingLevel::HighSchool => LevelProfile {
                grade: "9th-12th grade",
                description: "More sophisticated language, complex concepts",
                max_sentence_words: 35,
            },
            ReadingLevel::College => LevelProfile {
                grade: "College level",
                description: "Academic language, specialized terms",
                max_sentence_words: 50,
            },
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!(ReadingLevel::parse("grade3"), Some(ReadingLevel::Grade3));
        assert_eq!(
            ReadingLevel::parse("middle-school"),
            Some(ReadingLevel::MiddleSchool)
        );
        assert_eq!(
            ReadingLevel::parse("high-school"),
            Some(ReadingLevel::HighSchool)
        );
        assert_eq!(ReadingLevel::parse("college"), Some(ReadingLevel::College));
    }

    #[test]
    fn test_parse_is_exact_match() {
        assert_eq!(ReadingLevel::parse("Grade3"), None);
        assert_eq!(ReadingLevel::parse("middle_school"), None);
        assert_eq!(ReadingLevel::parse(""), None);
    }

    #[test]
    fn test_resolve_defaults_to_middle_school() {
        assert_eq!(ReadingLevel::resolve(None), ReadingLevel::MiddleSchool);
        assert_eq!(
            ReadingLevel::resolve(Some("kindergarten")),
            ReadingLevel::MiddleSchool
        );
        assert_eq!(ReadingLevel::resolve(Some("college")), ReadingLevel::College);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ReadingLevel::HighSchool).unwrap();
        assert_eq!(json, r#""high-school""#);
        let level: ReadingLevel = serde_json::from_str(r#""grade3""#).unwrap();
        assert_eq!(level, ReadingLevel::Grade3);
    }

    #[test]
    fn test_thresholds_increase_with_level() {
        let lengths: Vec<usize> = ReadingLevel::ALL
            .iter()
            .map(|l| l.min_word_length())
            .collect();
        assert_eq!(lengths, vec![4, 6, 8, 10]);
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(ReadingLevel::Grade3.difficulty(), Difficulty::Basic);
        assert_eq!(ReadingLevel::College.difficulty(), Difficulty::Expert);
    }
}
