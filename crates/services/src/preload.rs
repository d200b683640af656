use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;

use edugen_core::model::{Slide, SlideId};

use crate::error::AssetError;

/// Fetches a single media asset to warm it up before presentation.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch one asset by locator.
    ///
    /// # Errors
    ///
    /// Returns `AssetError` on transport failure or a non-success status.
    async fn fetch(&self, url: &str) -> Result<(), AssetError>;
}

/// `AssetFetcher` over plain HTTP GET.
#[derive(Clone, Default)]
pub struct HttpAssetFetcher {
    client: Client,
}

impl HttpAssetFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, url: &str) -> Result<(), AssetError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AssetError::HttpStatus(response.status()));
        }
        // Drain the body so the transfer has finished by the time the
        // barrier releases.
        let _ = response.bytes().await?;
        Ok(())
    }
}

//
// ─── SETTLED OUTCOMES ──────────────────────────────────────────────────────────
//

/// How a single asset fetch settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Loaded,
    Failed,
}

/// Settled result for one slide's visual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOutcome {
    pub slide_id: SlideId,
    pub url: String,
    pub status: AssetStatus,
}

/// Report produced once every dispatched fetch has settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl PreloadReport {
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == AssetStatus::Loaded)
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == AssetStatus::Failed)
            .count()
    }

    /// True when every asset loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// Status for a given slide, if it was part of this preload.
    #[must_use]
    pub fn status_for(&self, slide_id: SlideId) -> Option<AssetStatus> {
        self.outcomes
            .iter()
            .find(|o| o.slide_id == slide_id)
            .map(|o| o.status)
    }
}

//
// ─── PRELOAD SERVICE ───────────────────────────────────────────────────────────
//

/// Eagerly fetches every slide visual before the presentation starts.
pub struct PreloadService {
    fetcher: Arc<dyn AssetFetcher>,
}

impl PreloadService {
    #[must_use]
    pub fn new(fetcher: Arc<dyn AssetFetcher>) -> Self {
        Self { fetcher }
    }

    #[must_use]
    pub fn over_http() -> Self {
        Self::new(Arc::new(HttpAssetFetcher::new()))
    }

    /// Fetch every slide's image concurrently and wait for all of them to
    /// settle. Always resolves: a failed asset is recorded as
    /// `AssetStatus::Failed` and logged, never returned as an error, so one
    /// broken image cannot block readiness. Completion is gated on the
    /// slowest fetch; partial readiness is not reported.
    pub async fn preload(&self, slides: &[Slide]) -> PreloadReport {
        let fetches = slides.iter().map(|slide| async move {
            let status = match self.fetcher.fetch(&slide.image_url).await {
                Ok(()) => AssetStatus::Loaded,
                Err(err) => {
                    tracing::warn!(
                        slide = %slide.id,
                        url = %slide.image_url,
                        error = %err,
                        "slide image failed to preload"
                    );
                    AssetStatus::Failed
                }
            };
            AssetOutcome {
                slide_id: slide.id,
                url: slide.image_url.clone(),
                status,
            }
        });

        PreloadReport {
            outcomes: join_all(fetches).await,
        }
    }
}
