// Local rule-based simplifier.
// Used when the language model is not configured or a call fails.
// Pure and synchronous: tables are loaded once and shared read-only.

pub mod fallback;
pub mod lexicon;
pub mod reading_level;
pub mod rewrite;
pub mod vocabulary;

pub use fallback::{extractive_summary, LocalSimplifier};
pub use lexicon::Lexicon;
pub use reading_level::ReadingLevel;
pub use vocabulary::{Difficulty, VocabularyEntry};
