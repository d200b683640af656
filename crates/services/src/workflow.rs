use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use edugen_core::model::Level;

use crate::error::FlowError;
use crate::loader::LessonSource;
use crate::preload::{PreloadReport, PreloadService};
use crate::presentation::PresentationController;

/// Result of a completed load → preload cycle.
#[derive(Debug)]
pub struct LessonStart {
    pub controller: PresentationController,
    pub preload: PreloadReport,
}

/// Sequences lesson generation, media preloading and controller creation.
///
/// The presentation is only ever entered once both the generator response
/// and the preload join barrier have settled; no navigation can race an
/// in-flight load.
pub struct LessonFlowService {
    source: Arc<dyn LessonSource>,
    preloader: PreloadService,
    in_flight: AtomicBool,
}

impl LessonFlowService {
    #[must_use]
    pub fn new(source: Arc<dyn LessonSource>, preloader: PreloadService) -> Self {
        Self {
            source,
            preloader,
            in_flight: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generate a lesson and hand back a fresh controller once every slide
    /// visual has settled.
    ///
    /// Only one cycle may be outstanding at a time; overlapping calls are
    /// rejected rather than raced or queued.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Busy` while another cycle is in flight and
    /// `FlowError::Load` when the generator fails. Asset failures never
    /// surface here; they are recorded in the returned `PreloadReport`.
    pub async fn start(&self, topic: &str, level: Level) -> Result<LessonStart, FlowError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FlowError::Busy);
        }
        // Released on drop so a cancelled cycle frees the trigger.
        let _guard = InFlightGuard(&self.in_flight);

        let lesson = self.source.load(topic, level).await?;
        let preload = self.preloader.preload(&lesson.slides).await;
        if !preload.is_clean() {
            tracing::warn!(failed = preload.failed(), "slide visuals failed to preload");
        }

        Ok(LessonStart {
            controller: PresentationController::new(lesson),
            preload,
        })
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
