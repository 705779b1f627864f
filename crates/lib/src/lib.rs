//! # studykit
//!
//! A request-routing and response-normalization layer between study material
//! and a hosted completion model. A request names an action and carries its
//! payload fields; the library validates the payload, builds the
//! action-specific prompt, invokes the model (or the document extractor),
//! cleans the raw completion, and wraps everything in a canonical response
//! envelope. The AI provider and the extractor are injected collaborators,
//! so the whole pipeline is stateless and pure given (action, payload).

pub mod clean;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod quiz;
pub mod types;

pub use errors::StudyError;
pub use types::{
    Action, AiTask, PromptMessage, ResponseEnvelope, StudyClient, StudyClientBuilder,
    StudyRequest, MAX_DOCUMENT_CHARS,
};

use crate::quiz::QuizQuestion;
use serde_json::Value;
use tracing::{debug, info, warn};

/// The outcome of a successful dispatch, before envelope construction.
struct ActionOutcome {
    text: String,
    questions: Option<Vec<QuizQuestion>>,
}

impl StudyClient {
    /// Handles one study request end to end and always returns an envelope.
    ///
    /// This is the router boundary: every failure, including anything
    /// unexpected inside dispatch, is caught and converted into a structured
    /// failure envelope. No error propagates past this method.
    pub async fn handle(&self, request: StudyRequest) -> ResponseEnvelope {
        let action_name = request.action.clone();
        info!(action = %action_name, "handling study request");

        match self.dispatch(request).await {
            Ok(outcome) => {
                let mut envelope = ResponseEnvelope::success(&action_name, outcome.text);
                envelope.questions = outcome.questions;
                envelope
            }
            Err(err) => {
                warn!(action = %action_name, error = %err, "request failed");
                ResponseEnvelope::failure(&action_name, &err)
            }
        }
    }

    /// Handles a raw JSON payload.
    ///
    /// A payload that does not deserialize into a request still produces a
    /// failure envelope rather than an error.
    pub async fn handle_value(&self, payload: Value) -> ResponseEnvelope {
        let action_name = payload
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        match serde_json::from_value::<StudyRequest>(payload) {
            Ok(request) => self.handle(request).await,
            Err(err) => ResponseEnvelope::failure(&action_name, &StudyError::from(err)),
        }
    }

    /// Validates the request and performs exactly one external call.
    async fn dispatch(&self, request: StudyRequest) -> Result<ActionOutcome, StudyError> {
        let action: Action = request.action.parse()?;

        if action == Action::ExtractDocument {
            return self.extract_document(&request).await;
        }

        let task = validate_ai_task(action, &request)?;
        let messages = task.messages();
        let max_tokens = task.max_tokens();
        let raw = self.ai_provider.complete(&messages, max_tokens).await?;
        debug!(action = %action, raw_len = raw.len(), "model response received");

        // Quiz segmentation is line-oriented, so it runs on the tag-stripped
        // text before whitespace collapsing erases the line structure.
        let questions = match action {
            Action::GenerateQuiz => Some(quiz::parse_quiz(&clean::strip_markup(&raw))),
            _ => None,
        };

        Ok(ActionOutcome {
            text: clean::clean_response(&raw),
            questions,
        })
    }

    /// Delegates to the extraction collaborator and trims its output.
    async fn extract_document(&self, request: &StudyRequest) -> Result<ActionOutcome, StudyError> {
        let encoded = non_blank(request.encoded_document.as_deref())
            .ok_or_else(|| StudyError::EmptyInput("No document data provided".to_string()))?;

        let extracted = self.extractor.extract(&encoded).await?;
        Ok(ActionOutcome {
            text: extracted.trim().to_string(),
            questions: None,
        })
    }
}

/// Validates payload fields for an AI action and produces the typed task.
///
/// Document text is truncated to `MAX_DOCUMENT_CHARS` before any check, so
/// oversized input is capped rather than rejected. Runs before the model
/// call; a validation failure never reaches the provider.
fn validate_ai_task(action: Action, request: &StudyRequest) -> Result<AiTask, StudyError> {
    match action {
        Action::AnswerQuestion => {
            let text = required_document(request)?;
            let question = non_blank(request.question.as_deref())
                .ok_or_else(|| StudyError::MissingField("question".to_string()))?;
            Ok(AiTask::AnswerQuestion {
                context: text,
                question,
            })
        }
        Action::Summarize => Ok(AiTask::Summarize {
            text: required_document(request)?,
        }),
        Action::GenerateQuiz => Ok(AiTask::GenerateQuiz {
            text: required_document(request)?,
        }),
        Action::GradeAnswer => {
            let question = non_blank(request.question.as_deref());
            let user_answer = non_blank(request.user_answer.as_deref());
            let correct_answer = non_blank(request.correct_answer.as_deref());

            let mut missing = Vec::new();
            if question.is_none() {
                missing.push("question");
            }
            if user_answer.is_none() {
                missing.push("user_answer");
            }
            if correct_answer.is_none() {
                missing.push("correct_answer");
            }

            match (question, user_answer, correct_answer) {
                (Some(question), Some(user_answer), Some(correct_answer)) => {
                    Ok(AiTask::GradeAnswer {
                        question,
                        user_answer,
                        correct_answer,
                    })
                }
                _ => Err(StudyError::MissingField(missing.join(", "))),
            }
        }
        Action::ExtractDocument => unreachable!("extract_document is routed before AI validation"),
    }
}

/// Trims an optional field, treating blank values as absent.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Truncates the supplied document text and rejects blank results.
fn required_document(request: &StudyRequest) -> Result<String, StudyError> {
    let text: String = request
        .document_text
        .as_deref()
        .unwrap_or_default()
        .chars()
        .take(MAX_DOCUMENT_CHARS)
        .collect();
    if text.trim().is_empty() {
        return Err(StudyError::EmptyInput("No text content provided".to_string()));
    }
    Ok(text)
}
