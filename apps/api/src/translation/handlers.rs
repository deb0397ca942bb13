//! Axum route handlers for the Translation API.

use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::simplifier::ReadingLevel;
use crate::state::AppState;
use crate::text::handlers::{json_body, validate_text};
use crate::translation::languages::{language_map, language_name, supported_codes};
use crate::translation::translator::{translate, TranslationResult};

/// Maximum characters accepted for translation.
pub const MAX_TRANSLATE_CHARS: usize = 5_000;

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target_language: Option<String>,
    pub reading_level: Option<String>,
}

/// GET /api/translation/languages
pub async fn handle_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: language_map(),
    })
}

/// POST /api/translation/translate
///
/// Translates text while keeping its reading level. Needs a configured model.
pub async fn handle_translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslationResult>, AppError> {
    let request = json_body(payload)?;
    let text = validate_text(request.text, MAX_TRANSLATE_CHARS)?;

    let code = request.target_language.unwrap_or_default();
    let name = language_name(&code).ok_or_else(|| {
        AppError::Validation(format!(
            "Unsupported language. Supported languages: {}",
            supported_codes()
        ))
    })?;
    let level = ReadingLevel::resolve(request.reading_level.as_deref());

    let model = state.model().ok_or_else(|| {
        AppError::ServiceUnavailable("Translation requires a configured AI provider".to_string())
    })?;

    let result = translate(model, &text, &code, name, level).await?;
    Ok(Json(result))
}
