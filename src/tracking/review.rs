//! # Review Scheduler
//!
//! Concurrency shell around [`TrackingEngine`]: shares the engine
//! behind an `Arc<RwLock>` and turns every upload into a one-shot
//! deferred verification.
//!
//! The timer is fire-and-forget by design. There is no cancellation:
//! a `reset()` during the delay does not stop the task, it only makes
//! the eventual `complete_review` a silent no-op against an absent
//! record. Several uploads to the same id each spawn their own timer;
//! the first to fire wins and the rest find the record already
//! Verified.
//!
//! Ordering: for one id, Uploaded is always observable strictly before
//! Verified. Timers for different ids fire in no guaranteed relative
//! order.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::observability::Logger;

use super::engine::{TrackedDocument, TrackingEngine, VerificationStats};
use super::errors::{TrackingError, TrackingResult};

/// Review scheduler configuration
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// How long the simulated review takes after an upload
    pub review_delay: Duration,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            review_delay: Duration::from_millis(3000),
        }
    }
}

impl ReviewConfig {
    pub fn with_delay(review_delay: Duration) -> Self {
        Self { review_delay }
    }
}

/// Shared handle over the tracking engine plus the review timer.
///
/// Cloning is cheap; all clones operate on the same engine. Must be
/// used inside a Tokio runtime, since uploads spawn the review task.
#[derive(Debug, Clone, Default)]
pub struct ReviewScheduler {
    engine: Arc<RwLock<TrackingEngine>>,
    config: ReviewConfig,
}

impl ReviewScheduler {
    pub fn new(config: ReviewConfig) -> Self {
        Self {
            engine: Arc::new(RwLock::new(TrackingEngine::new())),
            config,
        }
    }

    /// Record an upload and schedule its verification.
    ///
    /// The engine mutation is synchronous; the caller observes the
    /// Uploaded status as soon as this returns. The Verified transition
    /// follows after `review_delay` on the runtime.
    pub fn record_upload(&self, id: &str, file_name: Option<String>) -> TrackingResult<()> {
        {
            let mut engine = self.write()?;
            engine.record_upload(id, file_name)?;
        }

        let engine = Arc::clone(&self.engine);
        let delay = self.config.review_delay;
        let id = id.to_string();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match engine.write() {
                Ok(mut engine) => {
                    if engine.complete_review(&id) {
                        Logger::info("review_completed", &[("document", &id)]);
                    }
                }
                Err(_) => {
                    Logger::error("review_lock_poisoned", &[("document", &id)]);
                }
            }
        });

        Ok(())
    }

    /// Toggle an id in the selection list. Returns the new membership.
    pub fn toggle_selection(&self, id: &str) -> TrackingResult<bool> {
        Ok(self.write()?.toggle_selection(id))
    }

    /// Clear selection and tracked documents; in-flight timers become
    /// no-ops.
    pub fn reset(&self) -> TrackingResult<()> {
        self.write()?.reset();
        Ok(())
    }

    pub fn display_set(&self) -> TrackingResult<Vec<TrackedDocument>> {
        Ok(self.read()?.display_set())
    }

    pub fn stats(&self) -> TrackingResult<VerificationStats> {
        Ok(self.read()?.stats())
    }

    fn read(&self) -> TrackingResult<std::sync::RwLockReadGuard<'_, TrackingEngine>> {
        self.engine
            .read()
            .map_err(|_| TrackingError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> TrackingResult<std::sync::RwLockWriteGuard<'_, TrackingEngine>> {
        self.engine
            .write()
            .map_err(|_| TrackingError::Internal("Lock poisoned".to_string()))
    }
}
