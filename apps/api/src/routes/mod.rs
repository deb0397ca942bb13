pub mod health;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;
use crate::text::handlers as text;
use crate::translation::handlers as translation;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        // Text API
        .route("/api/text/process", post(text::handle_process))
        .route("/api/text/vocabulary", post(text::handle_vocabulary))
        .route("/api/text/speech", post(text::handle_speech))
        .route("/api/simplify", post(text::handle_simplify))
        // Translation API
        .route(
            "/api/translation/languages",
            get(translation::handle_languages),
        )
        .route(
            "/api/translation/translate",
            post(translation::handle_translate),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Per-client-IP quota over every route. Callers must serve with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the peer address is known.
pub fn rate_limited(router: Router, config: &Config) -> Result<Router> {
    let governor = GovernorConfigBuilder::default()
        .period(config.rate_limit_period())
        .burst_size(config.rate_limit_max_requests)
        .finish()
        .context("invalid rate limit configuration")?;

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor),
    }))
}
