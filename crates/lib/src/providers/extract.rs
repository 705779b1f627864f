use crate::errors::StudyError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for the document-text-extraction collaborator.
///
/// Takes base64-encoded document bytes and returns the full extracted UTF-8
/// text, or `StudyError::Extraction` with the collaborator's detail message.
#[async_trait]
pub trait DocumentExtractor: Send + Sync + Debug + DynClone {
    async fn extract(&self, encoded_document: &str) -> Result<String, StudyError>;
}

dyn_clone::clone_trait_object!(DocumentExtractor);
