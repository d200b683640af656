#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod preload;
pub mod presentation;
pub mod workflow;

pub use error::{AssetError, FlowError, LoadError};
pub use loader::{GeneratorConfig, GeneratorService, LessonSource};
pub use preload::{
    AssetFetcher, AssetOutcome, AssetStatus, HttpAssetFetcher, PreloadReport, PreloadService,
};
pub use presentation::{
    AnswerKeyEntry, Mode, Motivation, PresentationController, PresentationProgress, QuizPhase,
    QuizStep, SlideChange,
};
pub use workflow::{LessonFlowService, LessonStart};
