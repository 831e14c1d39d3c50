//! Document HTTP Routes
//!
//! Catalog enumeration plus the tracking engine operations: selection
//! toggle, multipart upload, display set, statistics, and reset.
//!
//! Uploads consume the file name only; the bytes are read off the wire
//! and dropped, since no real storage or verification exists.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::tracking::{
    ReviewScheduler, TrackedDocument, TrackingError, VerificationStats,
};

/// Document state shared across handlers
pub struct DocumentState {
    pub scheduler: ReviewScheduler,
}

impl DocumentState {
    pub fn new(scheduler: ReviewScheduler) -> Self {
        Self { scheduler }
    }
}

/// Document routes with shared state
pub fn document_routes(state: Arc<DocumentState>) -> Router {
    Router::new()
        .route("/", get(list_documents_handler))
        .route("/stats", get(stats_handler))
        .route("/reset", post(reset_handler))
        .route("/{id}/select", post(select_handler))
        .route("/{id}/upload", post(upload_handler))
        .with_state(state)
}

/// Catalog routes (static, no state)
pub fn catalog_routes() -> Router {
    Router::new().route("/", get(catalog_handler))
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub documents: Vec<TrackedDocument>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub verified: usize,
    pub uploaded: usize,
    pub pending: usize,
    pub total: usize,
    pub progress_percentage: f64,
}

impl From<VerificationStats> for StatsResponse {
    fn from(stats: VerificationStats) -> Self {
        Self {
            verified: stats.verified,
            uploaded: stats.uploaded,
            pending: stats.pending,
            total: stats.total,
            progress_percentage: stats.progress_percentage(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub id: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<TrackingError> for ErrorResponse {
    fn from(err: TrackingError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code(),
        }
    }
}

fn error_reply(err: TrackingError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

// ==================
// Handlers
// ==================

/// List the display set: tracked documents, then selected-but-unuploaded
/// placeholders.
async fn list_documents_handler(
    State(state): State<Arc<DocumentState>>,
) -> Result<Json<DocumentsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.scheduler.display_set() {
        Ok(documents) => {
            let total = documents.len();
            Ok(Json(DocumentsResponse { documents, total }))
        }
        Err(e) => Err(error_reply(e)),
    }
}

/// Aggregate statistics over the display set
async fn stats_handler(
    State(state): State<Arc<DocumentState>>,
) -> Result<Json<StatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.scheduler.stats() {
        Ok(stats) => Ok(Json(StatsResponse::from(stats))),
        Err(e) => Err(error_reply(e)),
    }
}

/// Toggle a document type in the selection set
async fn select_handler(
    State(state): State<Arc<DocumentState>>,
    Path(id): Path<String>,
) -> Result<Json<SelectResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.scheduler.toggle_selection(&id) {
        Ok(selected) => Ok(Json(SelectResponse { id, selected })),
        Err(e) => Err(error_reply(e)),
    }
}

/// Accept a multipart upload for a document type.
///
/// The first field carrying a filename wins; its bytes are drained and
/// discarded. Unknown ids are rejected with 404 and no state change.
async fn upload_handler(
    State(state): State<Arc<DocumentState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut file_name = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid multipart body: {}", e),
                code: 400,
            }),
        )
    })? {
        if let Some(name) = field.file_name() {
            file_name = Some(name.to_string());
            // Drain and drop the bytes; the demo never stores them
            let _ = field.bytes().await;
            break;
        }
    }

    match state.scheduler.record_upload(&id, file_name.clone()) {
        Ok(()) => Ok(Json(UploadResponse {
            id,
            status: "uploaded",
            file_name,
        })),
        Err(e) => Err(error_reply(e)),
    }
}

/// Clear selection and tracked documents
async fn reset_handler(
    State(state): State<Arc<DocumentState>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.scheduler.reset() {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_reply(e)),
    }
}

/// Enumerate the static document catalog
async fn catalog_handler() -> Json<serde_json::Value> {
    let catalog = Catalog::new();
    Json(serde_json::json!({
        "document_types": catalog.all(),
        "total": catalog.len(),
    }))
}
