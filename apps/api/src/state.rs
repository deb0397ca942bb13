use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LanguageModel;
use crate::simplifier::LocalSimplifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured: processing uses the local simplifier only
    /// and translation is unavailable.
    pub llm: Option<Arc<dyn LanguageModel>>,
    /// Rule-based fallback over the immutable lexicon loaded at startup.
    pub simplifier: LocalSimplifier,
    pub config: Config,
}

impl AppState {
    pub fn model(&self) -> Option<&dyn LanguageModel> {
        self.llm.as_deref()
    }
}
