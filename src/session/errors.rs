//! # Session Errors

use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session gate and session store errors
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Email or password did not match (generic on purpose, the
    /// response never says which one)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Operation requires an authenticated session
    #[error("Authentication required")]
    NotAuthenticated,

    /// The backing session store failed to read or write
    #[error("Session store failure: {0}")]
    StoreFailure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            SessionError::InvalidCredentials => 401,
            SessionError::NotAuthenticated => 401,
            SessionError::StoreFailure(_) => 500,
            SessionError::Internal(_) => 500,
        }
    }
}
