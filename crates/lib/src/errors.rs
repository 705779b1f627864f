use thiserror::Error;

/// Error taxonomy for the study pipeline.
///
/// Every variant is recoverable at the router boundary: `StudyClient::handle`
/// converts each into a failure `ResponseEnvelope` instead of propagating it.
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Invalid action: '{0}'. Supported actions: extract_document, answer_question, summarize, generate_quiz, grade_answer")]
    InvalidAction(String),
    #[error("{0}")]
    EmptyInput(String),
    #[error("Missing required field(s): {0}")]
    MissingField(String),
    #[error("Document extraction failed: {0}")]
    Extraction(String),
    #[error("Failed to build HTTP client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Request to the AI model failed: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the AI model response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI model returned an error: {0}")]
    AiApi(String),
    #[error("AI model response did not contain a completion")]
    AiMalformedResponse,
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Document extractor is missing")]
    MissingExtractor,
    #[error("Failed to parse request payload: {0}")]
    RequestDeserialization(#[from] serde_json::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl StudyError {
    /// The status code the router reports for this failure.
    ///
    /// Validation failures are the caller's fault (400); everything else is
    /// an invocation, extraction, or internal failure (500).
    pub fn status_code(&self) -> u16 {
        match self {
            StudyError::InvalidAction(_)
            | StudyError::EmptyInput(_)
            | StudyError::MissingField(_)
            | StudyError::RequestDeserialization(_) => 400,
            _ => 500,
        }
    }
}
