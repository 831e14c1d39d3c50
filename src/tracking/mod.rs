//! # Document Tracking
//!
//! The core of the service: the per-document status state machine,
//! the session's selection and tracked-document state, the derived
//! display sequence and statistics, and the deferred review timer.
//!
//! Module layout mirrors the split between pure state
//! ([`engine::TrackingEngine`], single-threaded, synchronous) and the
//! shared concurrent shell ([`review::ReviewScheduler`]).

pub mod engine;
pub mod errors;
pub mod review;
pub mod status;

pub use engine::{TrackedDocument, TrackingEngine, VerificationStats};
pub use errors::{TrackingError, TrackingResult};
pub use review::{ReviewConfig, ReviewScheduler};
pub use status::DocumentStatus;
