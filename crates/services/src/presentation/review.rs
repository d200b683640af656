use edugen_core::model::QuestionId;

/// Presentation-agnostic row for the answer-key review screen.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// `selected_text` is `None` for an unanswered question or an out-of-range
/// selection; the review layer renders its own fallback instead of indexing
/// into the options itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKeyEntry {
    pub position: usize,
    pub question_id: QuestionId,
    pub question_text: String,
    pub selected_option: Option<usize>,
    pub selected_text: Option<String>,
    pub correct_option: usize,
    pub correct_text: Option<String>,
    pub is_correct: bool,
}
