use serde::{Deserialize, Serialize};

use crate::model::quiz::QuizQuestion;
use crate::model::slide::Slide;

/// The generated bundle of slides and quiz questions for one topic/level
/// session. Immutable once deserialized; slide order defines playback order
/// and question order defines quiz order.
///
/// A usable lesson has at least one slide and one question, but degenerate
/// lessons (either sequence empty) are representable: the upstream generator
/// is not trusted to enforce non-emptiness, and consumers must degrade
/// gracefully instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub slides: Vec<Slide>,
    pub quiz: Vec<QuizQuestion>,
}

impl Lesson {
    #[must_use]
    pub fn new(slides: Vec<Slide>, quiz: Vec<QuizQuestion>) -> Self {
        Self { slides, quiz }
    }

    /// Both sequences non-empty.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.slides.is_empty() && !self.quiz.is_empty()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.quiz.get(index)
    }
}
