use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("a question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct option index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
}

//
// ─── QUIZ QUESTION ─────────────────────────────────────────────────────────────
//

/// One multiple-choice item with exactly one correct option.
///
/// Wire shape: `{questionId, questionText, options, correctOptionIndex}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_id: QuestionId,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

impl QuizQuestion {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::TooFewOptions` for fewer than two options and
    /// `QuizError::CorrectIndexOutOfRange` when the correct index does not
    /// address an option.
    pub fn new(
        question_id: QuestionId,
        question_text: impl Into<String>,
        options: Vec<String>,
        correct_option_index: usize,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions(options.len()));
        }
        if correct_option_index >= options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                index: correct_option_index,
                options: options.len(),
            });
        }
        Ok(Self {
            question_id,
            question_text: question_text.into(),
            options,
            correct_option_index,
        })
    }

    /// Whether the given option index is the correct one.
    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_option_index
    }

    /// Option text at `index`, or `None` when out of range.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Text of the correct option.
    ///
    /// `None` only for a malformed question whose correct index does not
    /// address an option; callers render a fallback rather than panic.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.option(self.correct_option_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Option {i}")).collect()
    }

    #[test]
    fn validated_constructor_accepts_well_formed() {
        let q = QuizQuestion::new(QuestionId::new(1), "Q?", options(4), 2).unwrap();
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
        assert_eq!(q.correct_option(), Some("Option 2"));
    }

    #[test]
    fn rejects_single_option() {
        let err = QuizQuestion::new(QuestionId::new(1), "Q?", options(1), 0).unwrap_err();
        assert_eq!(err, QuizError::TooFewOptions(1));
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let err = QuizQuestion::new(QuestionId::new(1), "Q?", options(3), 3).unwrap_err();
        assert!(matches!(err, QuizError::CorrectIndexOutOfRange { .. }));
    }

    #[test]
    fn question_deserializes_wire_shape() {
        let json = r#"{
            "questionId": 2,
            "questionText": "Which layer routes packets?",
            "options": ["Physical", "Network", "Session", "Application"],
            "correctOptionIndex": 1
        }"#;

        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_id, QuestionId::new(2));
        assert_eq!(q.option(1), Some("Network"));
        assert_eq!(q.option(9), None);
    }
}
