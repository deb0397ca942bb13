//! Text processor — AI-first simplification with the local simplifier as fallback.
//!
//! Flow: build prompt → LanguageModel::generate → validate + normalize JSON.
//! Any failure along the way (no model configured, HTTP error, quota, malformed
//! JSON, missing fields) falls back to `LocalSimplifier` and is logged, never surfaced.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, VOCABULARY_ITEM_SCHEMA};
use crate::llm_client::{generate_json, GenerationOptions, LanguageModel, LlmError};
use crate::simplifier::{
    extractive_summary, Difficulty, LocalSimplifier, ReadingLevel, VocabularyEntry,
};
use crate::text::prompts::{SIMPLIFY_PROMPT_TEMPLATE, SUMMARY_FIELD, VOCABULARY_PROMPT_TEMPLATE};

const SIMPLIFY_MAX_TOKENS: u32 = 2000;
const VOCABULARY_MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;

/// Which path produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Ai,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub simplified_text: String,
    pub vocabulary: Vec<VocabularyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub source: ResultSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Raw model output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProcessOutput {
    simplified_text: Option<String>,
    vocabulary: Option<Vec<RawVocabularyItem>>,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVocabularyItem {
    word: Option<String>,
    definition: Option<String>,
    example: Option<String>,
    difficulty: Option<String>,
}

/// Normalizes model vocabulary: unknown difficulty → intermediate, entries
/// missing a word or definition are dropped.
fn normalize_vocabulary(items: Vec<RawVocabularyItem>) -> Vec<VocabularyEntry> {
    items
        .into_iter()
        .map(|item| VocabularyEntry {
            word: item.word.unwrap_or_default(),
            definition: item.definition.unwrap_or_default(),
            example: item.example.unwrap_or_default(),
            difficulty: match item.difficulty.as_deref() {
                Some("basic") => Difficulty::Basic,
                Some("advanced") => Difficulty::Advanced,
                _ => Difficulty::Intermediate,
            },
        })
        .filter(|entry| !entry.word.is_empty() && !entry.definition.is_empty())
        .collect()
}

fn build_simplify_prompt(text: &str, level: ReadingLevel, include_summary: bool) -> String {
    let profile = level.profile();
    let prompt = SIMPLIFY_PROMPT_TEMPLATE
        .replace("{grade}", profile.grade)
        .replace("{description}", profile.description)
        .replace("{max_words}", &profile.max_sentence_words.to_string())
        .replace("{vocabulary_item}", VOCABULARY_ITEM_SCHEMA)
        .replace(
            "{summary_field}",
            if include_summary { SUMMARY_FIELD } else { "" },
        )
        // Last, so user text containing placeholders is left alone.
        .replace("{text}", text);
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

fn build_vocabulary_prompt(text: &str, level: ReadingLevel) -> String {
    let prompt = VOCABULARY_PROMPT_TEMPLATE
        .replace("{grade}", level.profile().grade)
        .replace("{vocabulary_item}", VOCABULARY_ITEM_SCHEMA)
        .replace("{text}", text);
    format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}")
}

// ────────────────────────────────────────────────────────────────────────────
// Processing
// ────────────────────────────────────────────────────────────────────────────

/// Simplifies `text`, preferring the language model when one is configured.
pub async fn process_text(
    model: Option<&dyn LanguageModel>,
    local: &LocalSimplifier,
    text: &str,
    level: ReadingLevel,
    include_summary: bool,
) -> ProcessResponse {
    if let Some(model) = model {
        match process_with_model(model, text, level, include_summary).await {
            Ok(response) => return response,
            Err(e) => warn!(
                "AI simplification via {} failed, using local simplifier: {e}",
                model.model_name()
            ),
        }
    } else {
        info!("No language model configured, using local simplifier");
    }

    let result = local.process(text, level);
    let summary = include_summary.then(|| extractive_summary(&result.simplified_text));
    ProcessResponse {
        simplified_text: result.simplified_text,
        vocabulary: result.vocabulary,
        summary,
        source: ResultSource::Local,
    }
}

async fn process_with_model(
    model: &dyn LanguageModel,
    text: &str,
    level: ReadingLevel,
    include_summary: bool,
) -> Result<ProcessResponse, LlmError> {
    let prompt = build_simplify_prompt(text, level, include_summary);
    let options = GenerationOptions {
        temperature: TEMPERATURE,
        max_output_tokens: SIMPLIFY_MAX_TOKENS,
    };

    let raw: RawProcessOutput = generate_json(model, &prompt, options).await?;

    let vocabulary = raw.vocabulary.ok_or_else(|| {
        LlmError::InvalidResponse("missing vocabulary array".to_string())
    })?;
    let simplified_text = raw
        .simplified_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| LlmError::InvalidResponse("missing simplified text".to_string()))?;

    let summary = if include_summary {
        Some(
            raw.summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| extractive_summary(&simplified_text)),
        )
    } else {
        None
    };

    Ok(ProcessResponse {
        simplified_text,
        vocabulary: normalize_vocabulary(vocabulary),
        summary,
        source: ResultSource::Ai,
    })
}

/// Extracts vocabulary only, preferring the language model.
pub async fn extract_vocabulary(
    model: Option<&dyn LanguageModel>,
    local: &LocalSimplifier,
    text: &str,
    level: ReadingLevel,
) -> (Vec<VocabularyEntry>, ResultSource) {
    if let Some(model) = model {
        let prompt = build_vocabulary_prompt(text, level);
        let options = GenerationOptions {
            temperature: TEMPERATURE,
            max_output_tokens: VOCABULARY_MAX_TOKENS,
        };
        match generate_json::<RawProcessOutput>(model, &prompt, options).await {
            Ok(RawProcessOutput {
                vocabulary: Some(items),
                ..
            }) => return (normalize_vocabulary(items), ResultSource::Ai),
            Ok(_) => warn!("AI vocabulary response had no vocabulary array, using local extractor"),
            Err(e) => warn!("AI vocabulary extraction failed, using local extractor: {e}"),
        }
    }

    (local.extract_vocabulary(text, level), ResultSource::Local)
}
