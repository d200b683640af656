mod controller;
mod motivation;
mod progress;
mod review;

// Public API of the presentation subsystem.
pub use controller::{Mode, PresentationController, QuizPhase, QuizStep, SlideChange};
pub use motivation::Motivation;
pub use progress::PresentationProgress;
pub use review::AnswerKeyEntry;
