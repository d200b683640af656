#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerSheet, Lesson, Level, QuestionId, QuizError, QuizQuestion, Slide, SlideId,
};
