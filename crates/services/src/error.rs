//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `LessonSource`.
///
/// Only lesson loading surfaces failures across the core boundary; everything
/// downstream (preloading, navigation) is absorbed into state instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error("lesson generator returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl LoadError {
    /// Single generic retry prompt shown to the user; no structured
    /// sub-codes cross the boundary.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::EmptyTopic => "Please enter a topic first.",
            _ => "Could not generate the lesson. Check that the backend is running and try again.",
        }
    }
}

/// Errors emitted by an `AssetFetcher`.
///
/// The preloader swallows these into per-asset status; they never propagate
/// past it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssetError {
    #[error("asset fetch returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `LessonFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("a lesson load is already in progress")]
    Busy,
    #[error(transparent)]
    Load(#[from] LoadError),
}
