pub mod chat;

use crate::errors::StudyError;
use crate::types::PromptMessage;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for invoking a completion model.
///
/// This is the single seam between the router and the hosted model: one call
/// per request, no retry, no fallback. Implementations own their transport
/// and model configuration; the caller supplies only the prompt messages and
/// a per-action token budget.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends the prompt messages to the model and returns the generated text.
    ///
    /// Fails with a `StudyError` wrapping any transport, serialization, or
    /// malformed-response condition.
    async fn complete(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
    ) -> Result<String, StudyError>;
}

dyn_clone::clone_trait_object!(AiProvider);
