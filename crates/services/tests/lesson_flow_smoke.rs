use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use edugen_core::model::{Lesson, Level, QuestionId, QuizQuestion, Slide, SlideId};
use services::{
    AssetError, AssetFetcher, AssetStatus, FlowError, LessonFlowService, LessonSource, LoadError,
    Mode, Motivation, PreloadService, QuizStep, SlideChange,
};

fn slide(id: u64, image_url: &str) -> Slide {
    Slide {
        id: SlideId::new(id),
        title: format!("Slide {id}"),
        text: format!("Narration {id}"),
        image_prompt: String::new(),
        image_url: image_url.into(),
        audio_url: format!("/static/audio_{id}.mp3"),
    }
}

fn question(id: u64, correct: usize) -> QuizQuestion {
    QuizQuestion::new(
        QuestionId::new(id),
        format!("Q{id}?"),
        vec!["A".into(), "B".into(), "C".into(), "D".into()],
        correct,
    )
    .unwrap()
}

fn lesson() -> Lesson {
    Lesson::new(
        vec![
            slide(1, "/static/img_1.png"),
            slide(2, "/static/broken.png"),
            slide(3, "/static/img_3.png"),
        ],
        vec![question(1, 0), question(2, 1)],
    )
}

struct FixedSource(Lesson);

#[async_trait]
impl LessonSource for FixedSource {
    async fn load(&self, topic: &str, _level: Level) -> Result<Lesson, LoadError> {
        if topic.trim().is_empty() {
            return Err(LoadError::EmptyTopic);
        }
        Ok(self.0.clone())
    }
}

struct SlowSource(Lesson);

#[async_trait]
impl LessonSource for SlowSource {
    async fn load(&self, _topic: &str, _level: Level) -> Result<Lesson, LoadError> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(self.0.clone())
    }
}

/// Fails any URL containing "broken".
struct FlakyFetcher;

#[async_trait]
impl AssetFetcher for FlakyFetcher {
    async fn fetch(&self, url: &str) -> Result<(), AssetError> {
        if url.contains("broken") {
            Err(AssetError::HttpStatus(reqwest::StatusCode::NOT_FOUND))
        } else {
            Ok(())
        }
    }
}

fn flow_with(source: impl LessonSource + 'static) -> LessonFlowService {
    LessonFlowService::new(Arc::new(source), PreloadService::new(Arc::new(FlakyFetcher)))
}

#[tokio::test]
async fn full_cycle_walks_slides_quiz_and_review() {
    let flow = flow_with(FixedSource(lesson()));

    let start = flow
        .start("computer networks", Level::Beginner)
        .await
        .unwrap();

    // One broken visual settles as Failed without blocking readiness.
    assert_eq!(start.preload.outcomes.len(), 3);
    assert_eq!(start.preload.failed(), 1);
    assert_eq!(
        start.preload.status_for(SlideId::new(2)),
        Some(AssetStatus::Failed)
    );

    let mut ctl = start.controller;
    assert_eq!(ctl.mode(), Mode::Slides);
    assert_eq!(ctl.current_slide().unwrap().id, SlideId::new(1));

    assert_eq!(ctl.advance_slide(), SlideChange::Moved(1));
    assert_eq!(ctl.advance_slide(), SlideChange::Moved(2));
    assert_eq!(ctl.advance_slide(), SlideChange::EnteredQuiz);

    assert!(ctl.select_option(0, 0));
    assert_eq!(ctl.advance_question(), QuizStep::Moved(1));
    assert!(ctl.select_option(1, 0));
    assert_eq!(ctl.advance_question(), QuizStep::Finished);

    assert_eq!(ctl.score(), 1);
    assert_eq!(ctl.motivation(), Motivation::Encouragement);

    assert!(ctl.reveal_answer_key());
    let key = ctl.answer_key();
    assert_eq!(key.len(), 2);
    assert!(key[0].is_correct);
    assert!(!key[1].is_correct);
}

#[tokio::test]
async fn load_failure_surfaces_and_frees_the_flow() {
    let flow = flow_with(FixedSource(lesson()));

    let err = flow.start("  ", Level::Beginner).await.unwrap_err();
    assert!(matches!(err, FlowError::Load(LoadError::EmptyTopic)));
    assert!(!flow.is_busy());

    // A later attempt succeeds with no stale state carried over.
    let start = flow.start("second try", Level::Advanced).await.unwrap();
    assert!(start.controller.answers().is_empty());
    assert_eq!(start.controller.slide_index(), 0);
}

#[tokio::test]
async fn overlapping_starts_are_rejected() {
    let flow = flow_with(SlowSource(lesson()));

    let first = flow.start("topic", Level::Beginner);
    let second = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        flow.start("topic", Level::Beginner).await
    };

    let (first, second) = tokio::join!(first, second);
    assert!(first.is_ok());
    assert!(matches!(second, Err(FlowError::Busy)));

    // The flow is reusable once the winning cycle settles.
    assert!(!flow.is_busy());
    assert!(flow.start("topic", Level::Beginner).await.is_ok());
}
