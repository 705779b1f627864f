//! # Common Test Utilities
//!
//! Mock collaborators with recorded call histories, used by the router
//! tests to assert both outcomes and the absence of external calls on
//! validation failures.

#![allow(unused)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, RwLock};
use studykit::providers::{ai::AiProvider, extract::DocumentExtractor};
use studykit::{PromptMessage, StudyError};

pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

/// A mock AI provider that replays scripted responses and records every
/// call it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    pub call_history: Arc<RwLock<Vec<(Vec<PromptMessage>, u32)>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            call_history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_history.read().unwrap().len()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
    ) -> Result<String, StudyError> {
        self.call_history
            .write()
            .unwrap()
            .push((messages.to_vec(), max_tokens));
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default();
        Ok(response)
    }
}

/// A mock extractor that returns a fixed outcome and counts calls.
#[derive(Clone, Debug)]
pub struct MockExtractor {
    outcome: Result<String, String>,
    pub calls: Arc<Mutex<usize>>,
}

impl MockExtractor {
    pub fn ok(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            outcome: Err(detail.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl DocumentExtractor for MockExtractor {
    async fn extract(&self, _encoded_document: &str) -> Result<String, StudyError> {
        *self.calls.lock().unwrap() += 1;
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(detail) => Err(StudyError::Extraction(detail.clone())),
        }
    }
}
