use crate::{errors::StudyError, providers::ai::AiProvider, types::PromptMessage};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Fixed sampling temperature for near-deterministic completions.
///
/// Study-aid answers favor reproducibility over creative variation.
const TEMPERATURE: f32 = 0.1;

/// Timeout for a single completion call. A timed-out call surfaces as a
/// failure; there is no in-process cancellation beyond this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// --- Chat-completions request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [PromptMessage],
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: Option<String>,
}

// --- Provider implementation ---

/// A provider for any chat-completions style API.
///
/// The model identifier and endpoint are construction-time configuration and
/// never vary per call.
#[derive(Clone, Debug)]
pub struct ChatCompletionProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatCompletionProvider {
    /// Creates a new `ChatCompletionProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: String,
    ) -> Result<Self, StudyError> {
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(StudyError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for ChatCompletionProvider {
    async fn complete(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
    ) -> Result<String, StudyError> {
        let request_body = ChatRequest {
            messages,
            model: &self.model,
            temperature: TEMPERATURE,
            max_tokens,
            stream: false,
        };

        debug!(model = %self.model, max_tokens, "sending completion request");

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(StudyError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StudyError::AiApi(error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(StudyError::AiDeserialization)?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(StudyError::AiMalformedResponse)
    }
}
