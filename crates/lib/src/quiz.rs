//! # Quiz Segmentation
//!
//! Splits a quiz-formatted text blob into ordered question blocks for
//! structured answer-checking. The prompt asks the model for a rigid
//! `Q<N>.` / `A)`-`D)` layout, but the model is not guaranteed to obey it,
//! so this parser is total and defensive: unexpected shapes degrade to an
//! empty or partial result, never an error.

use serde::{Deserialize, Serialize};

/// One parsed question block: a synthetic id ("Q1", "Q2", ...) plus the full
/// accumulated text of the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
}

/// Parses a quiz blob into ordered question blocks.
///
/// Scans line by line with an expected question index starting at 1. A line
/// beginning `"<index>."` or `"<index> "` opens a new block and advances the
/// expected index; subsequent non-empty lines accumulate onto the open block,
/// joined with single spaces, until the next recognized start line or end of
/// input. Lines before the first recognized start are ignored.
pub fn parse_quiz(quiz_text: &str) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    let mut current: Option<(usize, String)> = None;
    let mut expected_index = 1;

    for line in quiz_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if starts_question(line, expected_index) {
            if let Some((index, text)) = current.take() {
                questions.push(QuizQuestion {
                    id: format!("Q{index}"),
                    text,
                });
            }
            current = Some((expected_index, line.to_string()));
            expected_index += 1;
        } else if let Some((_, text)) = current.as_mut() {
            text.push(' ');
            text.push_str(line);
        }
    }

    if let Some((index, text)) = current {
        questions.push(QuizQuestion {
            id: format!("Q{index}"),
            text,
        });
    }

    questions
}

/// Whether a trimmed line starts the question block for `index`.
fn starts_question(line: &str, index: usize) -> bool {
    line.starts_with(&format!("{index}.")) || line.starts_with(&format!("{index} "))
}
