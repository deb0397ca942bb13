//! Translator — asks the language model for a level-preserving translation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{generate_json, GenerationOptions, LanguageModel, LlmError};
use crate::simplifier::ReadingLevel;
use crate::translation::prompts::TRANSLATE_PROMPT_TEMPLATE;

const TRANSLATE_MAX_TOKENS: u32 = 2000;
const SOURCE_LANGUAGE: &str = "english";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub language_name: String,
    pub reading_level: ReadingLevel,
    pub original_language: String,
    pub character_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTranslation {
    translated_text: Option<String>,
}

/// Translates `text` into `language_code` (already validated; `language_name` is its
/// display name).
pub async fn translate(
    model: &dyn LanguageModel,
    text: &str,
    language_code: &str,
    language_name: &str,
    level: ReadingLevel,
) -> Result<TranslationResult, LlmError> {
    let prompt = TRANSLATE_PROMPT_TEMPLATE
        .replace("{language}", language_name)
        .replace("{level}", level.as_str())
        .replace("{text}", text);
    let prompt = format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}");

    let options = GenerationOptions {
        max_output_tokens: TRANSLATE_MAX_TOKENS,
        ..GenerationOptions::default()
    };

    let raw: RawTranslation = generate_json(model, &prompt, options).await?;
    let translated_text = raw
        .translated_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| LlmError::InvalidResponse("missing translated text".to_string()))?;

    debug!(
        "Translated {} chars into {language_code}",
        text.chars().count()
    );

    Ok(TranslationResult {
        original_text: text.to_string(),
        character_count: translated_text.chars().count(),
        word_count: translated_text.split_whitespace().count(),
        translated_text,
        target_language: language_code.to_string(),
        language_name: language_name.to_string(),
        reading_level: level,
        original_language: SOURCE_LANGUAGE.to_string(),
    })
}
