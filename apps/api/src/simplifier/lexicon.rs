//! Lexicon — the static tables that drive the local simplifier.
//!
//! Replacement tables, restructure rules and vocabulary definitions are data, not
//! logic. They live in a JSON document (compiled into the binary, or read from
//! `LEXICON_PATH`) and are loaded once at startup into an immutable `Lexicon`
//! shared behind an `Arc`.
//!
//! Table order is significant: replacements run in the order they appear in the
//! document, and a later key may re-match text produced by an earlier one.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use regex::{NoExpand, Regex};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::simplifier::reading_level::ReadingLevel;

const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.json");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown reading level '{0}' in lexicon")]
    UnknownLevel(String),

    #[error("lexicon must define middle-school tables")]
    MissingDefaultLevel,

    #[error("duplicate key '{key}' in {table}")]
    DuplicateKey { table: String, key: String },

    #[error("empty key in {table}")]
    EmptyKey { table: String },

    #[error("invalid replacement pattern for '{key}': {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Document shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LevelDocument {
    #[serde(default)]
    replacements: Vec<(String, String)>,
    #[serde(default)]
    restructure: Vec<(String, String)>,
    #[serde(default)]
    definitions: Vec<DefinitionRecord>,
}

#[derive(Debug, Deserialize)]
struct DefinitionRecord {
    word: String,
    definition: String,
    example: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct ReplacementRule {
    simple: String,
    pattern: Regex,
}

/// Ordered complex→simple word mapping, matched whole-word and case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
}

impl ReplacementTable {
    /// Builds a table from ordered pairs. `name` only labels errors.
    ///
    /// Keys are lower-cased. A key that appears twice is rejected rather than
    /// letting the later value silently win.
    pub fn from_pairs<I, K, V>(name: &str, pairs: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for (complex, simple) in pairs {
            let complex: String = complex.into();
            let complex = complex.trim().to_lowercase();
            if complex.is_empty() {
                return Err(LexiconError::EmptyKey {
                    table: name.to_string(),
                });
            }
            if !seen.insert(complex.clone()) {
                return Err(LexiconError::DuplicateKey {
                    table: name.to_string(),
                    key: complex,
                });
            }

            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&complex)))
                .map_err(|source| LexiconError::Pattern {
                    key: complex.clone(),
                    source,
                })?;

            rules.push(ReplacementRule {
                simple: simple.into(),
                pattern,
            });
        }

        Ok(Self { rules })
    }

    /// Applies every rule in insertion order to the running text.
    pub fn apply(&self, text: &str) -> String {
        self.rules.iter().fold(text.to_string(), |acc, rule| {
            rule.pattern
                .replace_all(&acc, NoExpand(&rule.simple))
                .into_owned()
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Ordered literal punctuation/conjunction substitutions that split long sentences.
#[derive(Debug, Clone, Default)]
pub struct RestructureRuleset {
    rules: Vec<(String, String)>,
}

impl RestructureRuleset {
    pub fn from_pairs<I, K, V>(name: &str, pairs: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut rules: Vec<(String, String)> = Vec::new();

        for (pattern, replacement) in pairs {
            let pattern: String = pattern.into();
            // An empty pattern would match between every character.
            if pattern.is_empty() {
                return Err(LexiconError::EmptyKey {
                    table: name.to_string(),
                });
            }
            if !seen.insert(pattern.clone()) {
                return Err(LexiconError::DuplicateKey {
                    table: name.to_string(),
                    key: pattern,
                });
            }
            rules.push((pattern, replacement.into()));
        }

        Ok(Self { rules })
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (pattern, replacement)| {
                acc.replace(pattern.as_str(), replacement)
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Canned definition and example sentence for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: String,
}

/// Lower-cased word → canned definition.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    entries: HashMap<String, Definition>,
}

impl DefinitionTable {
    pub fn from_entries<I>(name: &str, entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (String, Definition)>,
    {
        let mut map = HashMap::new();
        for (word, definition) in entries {
            let word = word.trim().to_lowercase();
            if word.is_empty() {
                return Err(LexiconError::EmptyKey {
                    table: name.to_string(),
                });
            }
            if map.insert(word.clone(), definition).is_some() {
                return Err(LexiconError::DuplicateKey {
                    table: name.to_string(),
                    key: word,
                });
            }
        }
        Ok(Self { entries: map })
    }

    /// Looks up a word case-insensitively.
    pub fn lookup(&self, word: &str) -> Option<&Definition> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Everything the local simplifier needs for one reading level.
#[derive(Debug, Clone, Default)]
pub struct LevelTables {
    pub replacements: ReplacementTable,
    pub restructure: RestructureRuleset,
    pub definitions: DefinitionTable,
}

// ────────────────────────────────────────────────────────────────────────────
// Lexicon
// ────────────────────────────────────────────────────────────────────────────

/// Immutable per-level tables. Levels missing from the document use the
/// middle-school tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    levels: HashMap<ReadingLevel, LevelTables>,
    default_tables: LevelTables,
}

impl Lexicon {
    /// The lexicon compiled into the binary.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_json(BUILTIN_LEXICON)
    }

    /// Loads from `path` when given, otherwise the built-in lexicon.
    pub fn load(path: Option<&Path>) -> Result<Self, LexiconError> {
        let lexicon = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                info!("Loading lexicon from {}", path.display());
                Self::from_json(&raw)?
            }
            None => Self::builtin()?,
        };

        for level in ReadingLevel::ALL {
            let tables = lexicon.tables(level);
            if tables.replacements.is_empty() {
                warn!("Lexicon {level}: replacement table is empty");
            }
            info!(
                "Lexicon {level}: {} replacements, {} restructure rules, {} definitions",
                tables.replacements.len(),
                tables.restructure.len(),
                tables.definitions.len()
            );
        }

        Ok(lexicon)
    }

    pub fn from_json(raw: &str) -> Result<Self, LexiconError> {
        let document: BTreeMap<String, LevelDocument> = serde_json::from_str(raw)?;

        let mut levels = HashMap::new();
        for (key, level_doc) in document {
            let level =
                ReadingLevel::parse(&key).ok_or_else(|| LexiconError::UnknownLevel(key.clone()))?;
            levels.insert(level, build_level(level, level_doc)?);
        }

        let default_tables = levels
            .get(&ReadingLevel::MiddleSchool)
            .cloned()
            .ok_or(LexiconError::MissingDefaultLevel)?;

        Ok(Self {
            levels,
            default_tables,
        })
    }

    pub fn tables(&self, level: ReadingLevel) -> &LevelTables {
        self.levels.get(&level).unwrap_or(&self.default_tables)
    }
}

fn build_level(level: ReadingLevel, doc: LevelDocument) -> Result<LevelTables, LexiconError> {
    let replacements =
        ReplacementTable::from_pairs(&format!("{level} replacements"), doc.replacements)?;
    let restructure =
        RestructureRuleset::from_pairs(&format!("{level} restructure"), doc.restructure)?;
    let definitions = DefinitionTable::from_entries(
        &format!("{level} definitions"),
        doc.definitions.into_iter().map(|d| {
            (
                d.word,
                Definition {
                    definition: d.definition,
                    example: d.example,
                },
            )
        }),
    )?;

    Ok(LevelTables {
        replacements,
        restructure,
        definitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_loads() {
        let lexicon = Lexicon::builtin().expect("built-in lexicon must be valid");
        for level in ReadingLevel::ALL {
            assert!(!lexicon.tables(level).replacements.is_empty());
        }
    }

    #[test]
    fn test_builtin_restructure_rule_counts() {
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(lexicon.tables(ReadingLevel::Grade3).restructure.len(), 6);
        assert_eq!(lexicon.tables(ReadingLevel::MiddleSchool).restructure.len(), 3);
        assert_eq!(lexicon.tables(ReadingLevel::HighSchool).restructure.len(), 0);
        assert_eq!(lexicon.tables(ReadingLevel::College).restructure.len(), 0);
    }

    #[test]
    fn test_builtin_grade3_mappings() {
        let lexicon = Lexicon::builtin().unwrap();
        let table = &lexicon.tables(ReadingLevel::Grade3).replacements;
        assert_eq!(table.apply("committee"), "group");
        assert_eq!(table.apply("Unanimous"), "all agreed");
    }

    #[test]
    fn test_duplicate_replacement_key_rejected() {
        let err = ReplacementTable::from_pairs(
            "test",
            [("proposal", "plan"), ("idea", "thought"), ("Proposal", "offer")],
        )
        .unwrap_err();
        match err {
            LexiconError::DuplicateKey { key, .. } => assert_eq!(key, "proposal"),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_key_in_document_names_level() {
        let raw = r#"{
            "middle-school": {
                "replacements": [["proposal", "plan"], ["proposal", "idea"]]
            }
        }"#;
        let err = Lexicon::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("middle-school replacements"));
        assert!(err.to_string().contains("proposal"));
    }

    #[test]
    fn test_duplicate_definition_rejected() {
        let def = Definition {
            definition: "d".to_string(),
            example: "e".to_string(),
        };
        let result = DefinitionTable::from_entries(
            "test",
            vec![("Word".to_string(), def.clone()), ("word".to_string(), def)],
        );
        assert!(matches!(result, Err(LexiconError::DuplicateKey { .. })));
    }

    #[test]
    fn test_empty_restructure_pattern_rejected() {
        let result = RestructureRuleset::from_pairs("test", [("", ". ")]);
        assert!(matches!(result, Err(LexiconError::EmptyKey { .. })));
    }

    #[test]
    fn test_unknown_level_rejected() {
        let raw = r#"{ "middle-school": {}, "kindergarten": {} }"#;
        assert!(matches!(
            Lexicon::from_json(raw),
            Err(LexiconError::UnknownLevel(l)) if l == "kindergarten"
        ));
    }

    #[test]
    fn test_missing_middle_school_rejected() {
        let raw = r#"{ "grade3": {} }"#;
        assert!(matches!(
            Lexicon::from_json(raw),
            Err(LexiconError::MissingDefaultLevel)
        ));
    }

    #[test]
    fn test_missing_level_falls_back_to_middle_school() {
        let raw = r#"{
            "middle-school": { "replacements": [["utilize", "use"]] }
        }"#;
        let lexicon = Lexicon::from_json(raw).unwrap();
        let tables = lexicon.tables(ReadingLevel::College);
        assert_eq!(tables.replacements.apply("utilize"), "use");
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        assert!(matches!(
            Lexicon::from_json("{ not json"),
            Err(LexiconError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Lexicon::load(Some(Path::new("/nonexistent/lexicon.json")));
        assert!(matches!(result, Err(LexiconError::Io { .. })));
    }

    #[test]
    fn test_replacement_is_whole_word() {
        let table = ReplacementTable::from_pairs("test", [("use", "employ")]).unwrap();
        assert_eq!(table.apply("use user reuse USE"), "employ user reuse employ");
    }

    #[test]
    fn test_replacement_value_is_literal() {
        let table = ReplacementTable::from_pairs("test", [("cost", "$1 price")]).unwrap();
        assert_eq!(table.apply("the cost"), "the $1 price");
    }

    #[test]
    fn test_restructure_applies_in_order() {
        let rules =
            RestructureRuleset::from_pairs("test", [(", and ", ". And "), (". And ", " & ")])
                .unwrap();
        assert_eq!(rules.apply("a, and b"), "a & b");
    }
}
