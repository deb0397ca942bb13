use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner listing the API roots.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Edvia API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/api/health", "/api/text", "/api/translation", "/api/simplify"]
    }))
}

/// GET /api/health
/// Reports liveness and whether the AI provider is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Edvia API is running",
        "timestamp": Utc::now().to_rfc3339(),
        "aiConfigured": state.llm.is_some(),
        "model": state.llm.as_ref().map(|_| state.config.gemini_model.as_str())
    }))
}
