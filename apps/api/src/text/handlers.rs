//! Axum route handlers for the text-processing API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::simplifier::{ReadingLevel, VocabularyEntry};
use crate::state::AppState;
use crate::text::processor::{extract_vocabulary, process_text, ProcessResponse, ResultSource};
use crate::text::speech::prepare_for_speech;

/// Maximum characters accepted for simplification.
pub const MAX_PROCESS_CHARS: usize = 10_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub text: Option<String>,
    pub reading_level: Option<String>,
    pub include_summary: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRequest {
    pub text: Option<String>,
    pub reading_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub vocabulary: Vec<VocabularyEntry>,
    pub source: ResultSource,
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeechResponse {
    pub text: String,
}

/// Turns an extractor rejection (bad JSON, wrong field types) into a 400.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Requires non-blank text of at most `max_chars` characters.
pub fn validate_text(text: Option<String>, max_chars: usize) -> Result<String, AppError> {
    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Text is required and must be a string".to_string()))?;

    if text.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "Text is too long. Maximum {max_chars} characters allowed."
        )));
    }

    Ok(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/text/process
///
/// Simplifies text for a reading level. `includeSummary` defaults to true.
pub async fn handle_process(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    run_process(&state, json_body(payload)?, true).await
}

/// POST /api/simplify
///
/// Same as `/api/text/process`, but `includeSummary` defaults to false.
pub async fn handle_simplify(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    run_process(&state, json_body(payload)?, false).await
}

async fn run_process(
    state: &AppState,
    request: ProcessRequest,
    default_summary: bool,
) -> Result<Json<ProcessResponse>, AppError> {
    let text = validate_text(request.text, MAX_PROCESS_CHARS)?;
    let level = ReadingLevel::resolve(request.reading_level.as_deref());
    let include_summary = request.include_summary.unwrap_or(default_summary);

    let response = process_text(
        state.model(),
        &state.simplifier,
        &text,
        level,
        include_summary,
    )
    .await;

    Ok(Json(response))
}

/// POST /api/text/vocabulary
///
/// Extracts vocabulary only. Reading level defaults to middle-school.
pub async fn handle_vocabulary(
    State(state): State<AppState>,
    payload: Result<Json<VocabularyRequest>, JsonRejection>,
) -> Result<Json<VocabularyResponse>, AppError> {
    let request = json_body(payload)?;
    let text = validate_text(request.text, MAX_PROCESS_CHARS)?;
    let level = ReadingLevel::resolve(request.reading_level.as_deref());

    let (vocabulary, source) =
        extract_vocabulary(state.model(), &state.simplifier, &text, level).await;

    Ok(Json(VocabularyResponse { vocabulary, source }))
}

/// POST /api/text/speech
///
/// Returns text cleaned up for a text-to-speech engine.
pub async fn handle_speech(
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> Result<Json<SpeechResponse>, AppError> {
    let request = json_body(payload)?;
    let text = validate_text(request.text, MAX_PROCESS_CHARS)?;
    Ok(Json(SpeechResponse {
        text: prepare_for_speech(&text),
    }))
}
