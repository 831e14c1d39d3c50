//! # Document Status
//!
//! The per-document state machine. Three states, one direction:
//!
//! ```text
//! Pending --upload--> Uploaded --review timer--> Verified
//! ```
//!
//! ## Invariants
//! - DOC-T2: Transitions are monotonic; no state is ever re-entered
//!   and no state is skipped. Verified is terminal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a single tracked document.
///
/// The derived ordering matches pipeline progress, so "never regress"
/// checks are plain `<` comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Selected for submission, no file uploaded yet
    Pending,

    /// File received, simulated review in progress
    Uploaded,

    /// Review complete. Terminal.
    Verified,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Verified => "verified",
        }
    }

    /// Whether moving from `self` to `next` is a legal step.
    ///
    /// Staying in place is legal (re-uploads and duplicate review
    /// timers are idempotent); moving backwards or skipping a state
    /// is not.
    pub fn can_step_to(&self, next: DocumentStatus) -> bool {
        use DocumentStatus::*;
        matches!(
            (*self, next),
            (Pending, Pending)
                | (Pending, Uploaded)
                | (Uploaded, Uploaded)
                | (Uploaded, Verified)
                | (Verified, Verified)
        )
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
