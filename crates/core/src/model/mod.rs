mod answers;
mod ids;
mod lesson;
mod level;
mod quiz;
mod slide;

pub use answers::AnswerSheet;
pub use ids::{QuestionId, SlideId};
pub use lesson::Lesson;
pub use level::Level;
pub use quiz::{QuizError, QuizQuestion};
pub use slide::Slide;
