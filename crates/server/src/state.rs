//! # Application State
//!
//! The shared state handed to every request handler: one `StudyClient`
//! wired with the configured AI provider and the PDF extractor. Everything
//! in it is read-only after startup; concurrent requests share no mutable
//! data.

use crate::config::AppConfig;
use std::sync::Arc;
use studykit::{providers::ai::chat::ChatCompletionProvider, StudyClient, StudyClientBuilder};
use studykit_pdf::PdfExtractor;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<StudyClient>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_url = config
        .ai_api_url
        .clone()
        .ok_or_else(|| anyhow::anyhow!("AI_API_URL is not configured"))?;

    let ai_provider =
        ChatCompletionProvider::new(api_url, config.ai_api_key.clone(), config.ai_model.clone())?;

    let client = StudyClientBuilder::new()
        .ai_provider(Box::new(ai_provider))
        .extractor(Box::new(PdfExtractor::new()))
        .build()?;

    Ok(AppState {
        client: Arc::new(client),
    })
}
