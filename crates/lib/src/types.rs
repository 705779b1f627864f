use crate::errors::StudyError;
use crate::providers::{ai::AiProvider, extract::DocumentExtractor};
use crate::quiz::QuizQuestion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on document text used for prompt construction.
///
/// Text beyond this bound is silently dropped to cap prompt size and cost;
/// it is never a reason to reject a request.
pub const MAX_DOCUMENT_CHARS: usize = 5000;

/// The wire names of every supported action, in routing order.
pub const SUPPORTED_ACTIONS: [&str; 5] = [
    "extract_document",
    "answer_question",
    "summarize",
    "generate_quiz",
    "grade_answer",
];

/// The closed set of operations a request can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ExtractDocument,
    AnswerQuestion,
    Summarize,
    GenerateQuiz,
    GradeAnswer,
}

impl Action {
    /// The wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ExtractDocument => "extract_document",
            Action::AnswerQuestion => "answer_question",
            Action::Summarize => "summarize",
            Action::GenerateQuiz => "generate_quiz",
            Action::GradeAnswer => "grade_answer",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extract_document" => Ok(Action::ExtractDocument),
            "answer_question" => Ok(Action::AnswerQuestion),
            "summarize" => Ok(Action::Summarize),
            "generate_quiz" => Ok(Action::GenerateQuiz),
            "grade_answer" => Ok(Action::GradeAnswer),
            other => Err(StudyError::InvalidAction(other.to_string())),
        }
    }
}

/// The inbound request envelope.
///
/// Which optional fields are required depends on the action; validation
/// happens in `StudyClient::dispatch` before any external call is made.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StudyRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    /// Base64-encoded document bytes, for `extract_document` only.
    #[serde(default)]
    pub encoded_document: Option<String>,
}

/// One role-tagged block of a model request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A validated, typed payload for one AI action.
///
/// Constructed only by router validation, so the non-empty-field invariants
/// hold by the time prompt construction sees it. Document text is already
/// truncated to `MAX_DOCUMENT_CHARS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiTask {
    AnswerQuestion { context: String, question: String },
    Summarize { text: String },
    GenerateQuiz { text: String },
    GradeAnswer {
        question: String,
        user_answer: String,
        correct_answer: String,
    },
}

/// The canonical outbound envelope.
///
/// Constructed exactly once per request and never mutated afterwards. The
/// router guarantees one of these is always produced, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub action: String,
    pub response: Option<String>,
    pub error: Option<String>,
    /// Parsed quiz questions, present only on `generate_quiz` success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuizQuestion>>,
    pub status_code: u16,
}

impl ResponseEnvelope {
    /// A success envelope wrapping cleaned or extracted text.
    pub fn success(action: &str, response: String) -> Self {
        Self {
            success: true,
            action: action.to_string(),
            response: Some(response),
            error: None,
            questions: None,
            status_code: 200,
        }
    }

    /// A failure envelope carrying the error's message and status code.
    pub fn failure(action: &str, error: &StudyError) -> Self {
        Self {
            success: false,
            action: action.to_string(),
            response: None,
            error: Some(error.to_string()),
            questions: None,
            status_code: error.status_code(),
        }
    }
}

/// A client that routes study requests to the AI provider or the document
/// extractor and wraps every outcome in a `ResponseEnvelope`.
pub struct StudyClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
    pub(crate) extractor: Box<dyn DocumentExtractor>,
}

impl fmt::Debug for StudyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudyClient")
            .field("ai_provider", &self.ai_provider)
            .field("extractor", &self.extractor)
            .finish()
    }
}

/// A builder for creating `StudyClient` instances.
///
/// Both collaborators are injected, so tests can substitute mocks without
/// any process-wide state.
#[derive(Default)]
pub struct StudyClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    extractor: Option<Box<dyn DocumentExtractor>>,
}

impl StudyClientBuilder {
    /// Creates a new `StudyClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used for completion calls.
    pub fn ai_provider(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    /// Sets the document extraction collaborator.
    pub fn extractor(mut self, extractor: Box<dyn DocumentExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Builds the `StudyClient`, failing if a collaborator is missing.
    pub fn build(self) -> Result<StudyClient, StudyError> {
        Ok(StudyClient {
            ai_provider: self.ai_provider.ok_or(StudyError::MissingAiProvider)?,
            extractor: self.extractor.ok_or(StudyError::MissingExtractor)?,
        })
    }
}
