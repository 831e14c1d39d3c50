//! HTTP API Tests
//!
//! Exercises the routers in-process with `tower::ServiceExt::oneshot`,
//! using an in-memory session store so tests never share state through
//! the filesystem.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use jprat::http_server::auth_routes::{auth_routes, AuthState};
use jprat::http_server::document_routes::{catalog_routes, document_routes, DocumentState};
use jprat::session::InMemorySessionStore;
use jprat::tracking::{ReviewConfig, ReviewScheduler};

fn test_router(review_delay_ms: u64) -> Router {
    let auth_state = Arc::new(AuthState::with_store(Box::new(InMemorySessionStore::new())));
    let scheduler = ReviewScheduler::new(ReviewConfig::with_delay(Duration::from_millis(
        review_delay_ms,
    )));
    let document_state = Arc::new(DocumentState::new(scheduler));

    Router::new()
        .nest("/auth", auth_routes(auth_state))
        .nest("/documents", document_routes(document_state))
        .nest("/catalog", catalog_routes())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn multipart_upload(uri: &str, file_name: &str) -> Request<Body> {
    let boundary = "jprat-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         dummy bytes\r\n\
         --{boundary}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_login_with_demo_credentials() {
    let router = test_router(3000);

    let response = router
        .oneshot(json_post(
            "/auth/login",
            r#"{"email":"admin@jprat.gov.in","password":"jprat2024"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Dr. Rajesh Kumar");
    assert_eq!(json["role"], "Authorized Officer");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let router = test_router(3000);

    let response = router
        .oneshot(json_post(
            "/auth/login",
            r#"{"email":"admin@jprat.gov.in","password":"wrong"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_user_endpoint_requires_session() {
    let router = test_router(3000);

    let response = router.clone().oneshot(get("/auth/user")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    router
        .clone()
        .oneshot(json_post(
            "/auth/login",
            r#"{"email":"admin@jprat.gov.in","password":"jprat2024"}"#,
        ))
        .await
        .unwrap();

    let response = router.clone().oneshot(get("/auth/user")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.clone().oneshot(empty_post("/auth/logout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.oneshot(get("/auth/user")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_enumeration() {
    let router = test_router(3000);

    let response = router.oneshot(get("/catalog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 12);
    assert_eq!(json["document_types"][0]["id"], "aadhar");
}

// =============================================================================
// Documents
// =============================================================================

#[tokio::test]
async fn test_select_and_list_documents() {
    let router = test_router(3000);

    let response = router
        .clone()
        .oneshot(empty_post("/documents/aadhar/select"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["selected"], true);

    let response = router.clone().oneshot(get("/documents")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["documents"][0]["status"], "pending");

    // Toggle off again
    let response = router
        .clone()
        .oneshot(empty_post("/documents/aadhar/select"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["selected"], false);

    let response = router.oneshot(get("/documents")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_upload_and_stats() {
    let router = test_router(3000);

    let response = router
        .clone()
        .oneshot(multipart_upload("/documents/pan/upload", "pan.pdf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "uploaded");
    assert_eq!(json["file_name"], "pan.pdf");

    let response = router.oneshot(get("/documents/stats")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["uploaded"], 1);
    assert_eq!(json["total"], 1);
    assert_eq!(json["progress_percentage"], 0.0);
}

#[tokio::test]
async fn test_upload_unknown_id_is_404() {
    let router = test_router(3000);

    let response = router
        .clone()
        .oneshot(multipart_upload("/documents/not_a_real_id/upload", "x.pdf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unknown document type: not_a_real_id");

    // Engine state unchanged
    let response = router.oneshot(get("/documents")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_upload_verifies_after_delay() {
    let router = test_router(30);

    router
        .clone()
        .oneshot(multipart_upload("/documents/aadhar/upload", "aadhar.pdf"))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(120)).await;

    let response = router.oneshot(get("/documents/stats")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["verified"], 1);
    assert_eq!(json["progress_percentage"], 100.0);
}

#[tokio::test]
async fn test_reset_clears_documents() {
    let router = test_router(3000);

    router
        .clone()
        .oneshot(empty_post("/documents/aadhar/select"))
        .await
        .unwrap();
    router
        .clone()
        .oneshot(multipart_upload("/documents/pan/upload", "pan.pdf"))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(empty_post("/documents/reset"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.oneshot(get("/documents")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
}
