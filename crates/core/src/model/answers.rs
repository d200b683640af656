use std::collections::HashMap;

use crate::model::quiz::QuizQuestion;

/// Answers recorded during a quiz run, keyed by question position
/// (0-based index into the lesson's question sequence, not the question id).
///
/// Entries are only added or overwritten; the whole sheet is cleared on a
/// quiz reset. Re-selecting a position before advancing overwrites the prior
/// choice, last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selected: HashMap<usize, usize>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option for a question position, overwriting any
    /// prior selection.
    pub fn select(&mut self, position: usize, option_index: usize) {
        self.selected.insert(position, option_index);
    }

    /// The recorded option for a position, if any.
    #[must_use]
    pub fn selected(&self, position: usize) -> Option<usize> {
        self.selected.get(&position).copied()
    }

    #[must_use]
    pub fn has_answer(&self, position: usize) -> bool {
        self.selected.contains_key(&position)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the recorded answer for `position` matches the question's
    /// correct option. Unanswered or out-of-range selections count as
    /// incorrect, never as an error.
    #[must_use]
    pub fn is_correct(&self, position: usize, question: &QuizQuestion) -> bool {
        match self.selected(position) {
            Some(option_index) => question.is_correct(option_index),
            None => false,
        }
    }

    /// Number of questions answered correctly over the given sequence.
    #[must_use]
    pub fn score(&self, questions: &[QuizQuestion]) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(position, question)| self.is_correct(*position, question))
            .count()
    }
}
