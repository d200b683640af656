use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use edugen_core::model::{Lesson, Level};

use crate::error::LoadError;

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
}

impl GeneratorConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("EDUGEN_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".into());
        Self { base_url }
    }
}

/// Upstream lesson generator.
///
/// One call per session; the caller owns retries. A failure never yields a
/// partial lesson.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Generate a lesson for a (topic, level) pair.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` for an empty topic, a transport failure, a
    /// non-success status, or a malformed response body.
    async fn load(&self, topic: &str, level: Level) -> Result<Lesson, LoadError>;
}

/// HTTP client for the generator backend.
#[derive(Clone)]
pub struct GeneratorService {
    client: Client,
    config: GeneratorConfig,
}

impl GeneratorService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl LessonSource for GeneratorService {
    async fn load(&self, topic: &str, level: Level) -> Result<Lesson, LoadError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(LoadError::EmptyTopic);
        }

        let url = format!(
            "{}/api/generate-learning",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = GenerateRequest { topic, level };

        let response = self.client.post(url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let lesson: Lesson = response.json().await?;
        tracing::debug!(
            slides = lesson.slide_count(),
            questions = lesson.question_count(),
            "lesson generated"
        );
        Ok(lesson)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    level: Level,
}
