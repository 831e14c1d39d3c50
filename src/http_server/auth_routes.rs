//! Auth HTTP Routes
//!
//! Login, logout, and current-user endpoints over the session gate.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::session::{
    DemoCredentials, FileSessionStore, SessionError, SessionGate, SessionStore, UserProfile,
};

/// Shared auth state
pub struct AuthState {
    pub gate: SessionGate<Box<dyn SessionStore>>,
}

impl AuthState {
    /// File-backed gate under the OS temp dir, session restored once
    /// at construction.
    pub fn new() -> Self {
        Self::with_store(Box::new(FileSessionStore::with_default_path()))
    }

    /// Gate over an injected store (tests use the in-memory one).
    pub fn with_store(store: Box<dyn SessionStore>) -> Self {
        let gate = SessionGate::new(DemoCredentials::default(), store);
        // A corrupt store should not keep the demo from starting
        let _ = gate.restore();
        Self { gate }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/user", get(get_user_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&UserProfile> for UserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<SessionError> for ErrorResponse {
    fn from(err: SessionError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

fn error_reply(err: SessionError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

// ==================
// Handlers
// ==================

/// Login handler
async fn login_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.gate.login(&request.email, &request.password) {
        Ok(profile) => Ok(Json(UserResponse::from(&profile))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Logout handler
async fn logout_handler(
    State(state): State<Arc<AuthState>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.gate.logout() {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_reply(e)),
    }
}

/// Current-user handler
async fn get_user_handler(
    State(state): State<Arc<AuthState>>,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.gate.current_user() {
        Ok(profile) => Ok(Json(UserResponse::from(&profile))),
        Err(e) => Err(error_reply(e)),
    }
}
