use edugen_core::model::{AnswerSheet, Lesson, QuizQuestion, Slide};

use super::motivation::Motivation;
use super::progress::PresentationProgress;
use super::review::AnswerKeyEntry;

//
// ─── MODES AND TRANSITIONS ─────────────────────────────────────────────────────
//

/// Top-level phase of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Slides,
    Quiz,
}

/// Sub-phase within `Mode::Quiz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Finished,
    ReviewingAnswerKey,
}

/// Outcome of a slide navigation request.
///
/// `Moved` carries the new slide index and doubles as the post-transition
/// hook for collaborators with side effects (the audio player restarts
/// narration on it); the controller itself stays effect-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideChange {
    Moved(usize),
    EnteredQuiz,
    Unchanged,
}

/// Outcome of a quiz navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Moved(usize),
    Finished,
    Blocked,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// State machine driving one lesson presentation.
///
/// Owns the single mutable presentation state: current mode, slide and quiz
/// cursors, the answer sheet, and the finished/revealed flags. Every
/// operation is a synchronous total function; out-of-range navigation is
/// ignored rather than reported, so a renderer can wire buttons straight to
/// these methods. Consumers read derived snapshots, never the state itself.
///
/// A fresh controller is built per lesson; starting a new topic discards it
/// wholesale, nothing carries over.
#[derive(Debug)]
pub struct PresentationController {
    lesson: Lesson,
    mode: Mode,
    slide_index: usize,
    quiz_index: usize,
    answers: AnswerSheet,
    quiz_finished: bool,
    answer_key_revealed: bool,
}

impl PresentationController {
    /// Start presenting a lesson from its first slide.
    ///
    /// Total over any lesson, including degenerate ones with no slides or
    /// no questions.
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            mode: Mode::Slides,
            slide_index: 0,
            quiz_index: 0,
            answers: AnswerSheet::new(),
            quiz_finished: false,
            answer_key_revealed: false,
        }
    }

    // ── accessors ──

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    #[must_use]
    pub fn quiz_index(&self) -> usize {
        self.quiz_index
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn is_quiz_finished(&self) -> bool {
        self.quiz_finished
    }

    #[must_use]
    pub fn is_answer_key_revealed(&self) -> bool {
        self.answer_key_revealed
    }

    /// `None` only for a lesson with no slides.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.lesson.slide(self.slide_index)
    }

    /// `None` only for a lesson with no questions.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.lesson.question(self.quiz_index)
    }

    /// Quiz sub-phase, derived from the finished/revealed flags.
    #[must_use]
    pub fn quiz_phase(&self) -> QuizPhase {
        if self.answer_key_revealed {
            QuizPhase::ReviewingAnswerKey
        } else if self.quiz_finished {
            QuizPhase::Finished
        } else {
            QuizPhase::Answering
        }
    }

    // ── slide navigation ──

    /// Move to the next slide, or enter the quiz from the last slide.
    ///
    /// This is the sole Slides→Quiz transition. The quiz cursor is left
    /// untouched, so going back to the slides and forward again resumes the
    /// quiz where it was. A lesson with no slides enters the quiz directly.
    pub fn advance_slide(&mut self) -> SlideChange {
        if self.mode != Mode::Slides {
            return SlideChange::Unchanged;
        }
        if self.slide_index + 1 < self.lesson.slide_count() {
            self.slide_index += 1;
            SlideChange::Moved(self.slide_index)
        } else {
            self.mode = Mode::Quiz;
            SlideChange::EnteredQuiz
        }
    }

    /// Move to the previous slide; no-op at the first slide or outside
    /// Slides mode.
    pub fn retreat_slide(&mut self) -> SlideChange {
        if self.mode == Mode::Slides && self.slide_index > 0 {
            self.slide_index -= 1;
            SlideChange::Moved(self.slide_index)
        } else {
            SlideChange::Unchanged
        }
    }

    /// Leave the quiz for the slides without losing quiz progress.
    ///
    /// Only available while still answering; returns whether the mode
    /// changed.
    pub fn return_to_slides(&mut self) -> bool {
        if self.mode == Mode::Quiz && !self.quiz_finished {
            self.mode = Mode::Slides;
            true
        } else {
            false
        }
    }

    // ── quiz ──

    /// Record the selected option for a question position, overwriting any
    /// earlier choice. Rejected (returns false) outside Quiz/Answering or
    /// when the position or option does not exist.
    pub fn select_option(&mut self, position: usize, option_index: usize) -> bool {
        if self.mode != Mode::Quiz || self.quiz_finished {
            return false;
        }
        let Some(question) = self.lesson.question(position) else {
            return false;
        };
        if option_index >= question.options.len() {
            return false;
        }
        self.answers.select(position, option_index);
        true
    }

    /// Move to the next question, or finish the quiz from the last one.
    ///
    /// Blocked while the current question has no recorded answer: skipping
    /// an unanswered question is not allowed. A quiz with no questions
    /// finishes on the first call instead of waiting for an answer that can
    /// never come.
    pub fn advance_question(&mut self) -> QuizStep {
        if self.mode != Mode::Quiz || self.quiz_finished {
            return QuizStep::Blocked;
        }
        if self.lesson.question_count() == 0 {
            self.quiz_finished = true;
            return QuizStep::Finished;
        }
        if !self.answers.has_answer(self.quiz_index) {
            return QuizStep::Blocked;
        }
        if self.quiz_index + 1 < self.lesson.question_count() {
            self.quiz_index += 1;
            QuizStep::Moved(self.quiz_index)
        } else {
            self.quiz_finished = true;
            QuizStep::Finished
        }
    }

    /// Reveal the answer key after the quiz has finished. Idempotent;
    /// ignored while still answering.
    pub fn reveal_answer_key(&mut self) -> bool {
        if self.quiz_finished {
            self.answer_key_revealed = true;
        }
        self.answer_key_revealed
    }

    /// Restart the quiz: answers cleared, cursor back to the first
    /// question, flags reset. The slide position and the mode are left
    /// untouched.
    pub fn reset_quiz(&mut self) {
        self.answers.clear();
        self.quiz_index = 0;
        self.quiz_finished = false;
        self.answer_key_revealed = false;
    }

    // ── derived queries (pure) ──

    /// Number of correctly answered questions. Unanswered positions count
    /// as incorrect.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers.score(&self.lesson.quiz)
    }

    /// Whether the question at `position` was answered correctly. A missing
    /// position or answer is incorrect, not an error.
    #[must_use]
    pub fn is_correct(&self, position: usize) -> bool {
        self.lesson
            .question(position)
            .is_some_and(|question| self.answers.is_correct(position, question))
    }

    /// Motivational tier for the current score.
    #[must_use]
    pub fn motivation(&self) -> Motivation {
        Motivation::for_score(self.score(), self.lesson.question_count())
    }

    /// One review row per question, in quiz order.
    #[must_use]
    pub fn answer_key(&self) -> Vec<AnswerKeyEntry> {
        self.lesson
            .quiz
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let selected_option = self.answers.selected(position);
                AnswerKeyEntry {
                    position,
                    question_id: question.question_id,
                    question_text: question.question_text.clone(),
                    selected_option,
                    selected_text: selected_option
                        .and_then(|index| question.option(index))
                        .map(str::to_owned),
                    correct_option: question.correct_option_index,
                    correct_text: question.correct_option().map(str::to_owned),
                    is_correct: self.answers.is_correct(position, question),
                }
            })
            .collect()
    }

    /// Snapshot of where the presentation stands.
    #[must_use]
    pub fn progress(&self) -> PresentationProgress {
        PresentationProgress {
            mode: self.mode,
            slide_index: self.slide_index,
            slide_count: self.lesson.slide_count(),
            quiz_index: self.quiz_index,
            question_count: self.lesson.question_count(),
            answered: self.answers.len(),
            quiz_finished: self.quiz_finished,
            answer_key_revealed: self.answer_key_revealed,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
