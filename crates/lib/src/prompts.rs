//! # Prompt Templates
//!
//! The templates sent to the completion model, one per AI action, and the
//! construction of `PromptMessage` sequences from validated task payloads.
//! Construction is pure and deterministic: identical inputs always produce
//! identical prompts. Payload fields are embedded verbatim; input length is
//! the router's responsibility, never the builder's.

use crate::types::{AiTask, PromptMessage};

/// Prompt for answering a question against supplied context.
///
/// Placeholders: `{context}`, `{question}`
pub const ANSWER_QUESTION_PROMPT: &str = "Answer this question based on the text below.
Text: {context}
Question: {question}
Provide a concise and accurate answer.";

/// Prompt for a structured bullet-point summary.
///
/// Placeholders: `{text}`
pub const SUMMARIZE_PROMPT: &str = "Create a well-structured bullet point summary of this text:
{text}
Focus on key concepts and main ideas.";

/// Prompt for quiz generation.
///
/// The rigid layout is a load-bearing contract: the display and grading
/// layers parse questions and options positionally. The model is not
/// guaranteed to obey it, which is why the quiz parser stays defensive.
///
/// Placeholders: `{text}`
pub const GENERATE_QUIZ_PROMPT: &str = "Create 3 multiple-choice questions about this text:
{text}
Format each question EXACTLY like this:
Q1. [Question text]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]

Q2. [Question text]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]

Q3. [Question text]
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]

Ensure each question starts with Q1., Q2., Q3. and options use A), B), C), D) format.";

/// Prompt for grading a quiz answer.
///
/// Placeholders: `{question}`, `{user_answer}`, `{correct_answer}`
pub const GRADE_ANSWER_PROMPT: &str = "Please provide feedback on this quiz answer:

Question: {question}

User's Answer: {user_answer}
Expected Correct Answer: {correct_answer}

Provide constructive feedback that:
1. First states whether the user's answer matches the expected answer
2. Explains why the expected answer is correct
3. Provides educational insights about the topic
4. Is encouraging and helpful for learning
Keep the feedback concise but informative.";

impl AiTask {
    /// Builds the message sequence for this task.
    ///
    /// Always a single user-role block, so the result is never empty.
    pub fn messages(&self) -> Vec<PromptMessage> {
        let content = match self {
            AiTask::AnswerQuestion { context, question } => ANSWER_QUESTION_PROMPT
                .replace("{context}", context)
                .replace("{question}", question),
            AiTask::Summarize { text } => SUMMARIZE_PROMPT.replace("{text}", text),
            AiTask::GenerateQuiz { text } => GENERATE_QUIZ_PROMPT.replace("{text}", text),
            AiTask::GradeAnswer {
                question,
                user_answer,
                correct_answer,
            } => GRADE_ANSWER_PROMPT
                .replace("{question}", question)
                .replace("{user_answer}", user_answer)
                .replace("{correct_answer}", correct_answer),
        };
        vec![PromptMessage::user(content)]
    }

    /// The token budget hint passed to the model for this task.
    pub fn max_tokens(&self) -> u32 {
        match self {
            AiTask::AnswerQuestion { .. } => 300,
            AiTask::Summarize { .. } => 400,
            AiTask::GenerateQuiz { .. } => 600,
            AiTask::GradeAnswer { .. } => 300,
        }
    }
}
