mod config;
mod errors;
mod llm_client;
mod routes;
mod simplifier;
mod state;
mod text;
mod translation;

use anyhow::Result;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{LanguageModel, LlmClient};
use crate::routes::{build_router, rate_limited};
use crate::simplifier::{Lexicon, LocalSimplifier};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Edvia API v{}", env!("CARGO_PKG_VERSION"));

    // Load lexicon (fails startup on malformed tables or duplicate keys)
    let lexicon = Lexicon::load(config.lexicon_path.as_deref())?;
    let simplifier = LocalSimplifier::new(Arc::new(lexicon));

    // Initialize LLM client
    let llm: Option<Arc<dyn LanguageModel>> = match &config.gemini_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.gemini_model.clone())?;
            info!("LLM client initialized (model: {})", config.gemini_model);
            Some(Arc::new(client) as Arc<dyn LanguageModel>)
        }
        None => {
            warn!("GEMINI_API_KEY not set; serving local simplifications only");
            None
        }
    };

    let state = AppState {
        llm,
        simplifier,
        config: config.clone(),
    };

    let app = rate_limited(build_router(state), &config)?
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_allowed_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!(
        "Listening on {addr} (rate limit: {} requests per {}s per client)",
        config.rate_limit_max_requests, config.rate_limit_window_secs
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

/// Permissive when no origins are configured, otherwise an explicit allow-list.
fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}
