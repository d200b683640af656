use super::controller::Mode;

/// Aggregated snapshot of presentation progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationProgress {
    pub mode: Mode,
    pub slide_index: usize,
    pub slide_count: usize,
    pub quiz_index: usize,
    pub question_count: usize,
    pub answered: usize,
    pub quiz_finished: bool,
    pub answer_key_revealed: bool,
}
