//! # Tracking Errors

use thiserror::Error;

/// Result type for tracking operations
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Document tracking errors
#[derive(Debug, Clone, Error)]
pub enum TrackingError {
    /// Upload named an id absent from the catalog. The engine rejects
    /// it rather than creating a malformed record.
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrackingError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            TrackingError::UnknownDocumentType(_) => 404,
            TrackingError::Internal(_) => 500,
        }
    }
}
