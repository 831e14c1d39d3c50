//! # HTTP Server Module
//!
//! Axum API server for the J-PRAT dashboard frontend.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/auth/*` - Login, logout, current user
//! - `/catalog` - Document type registry
//! - `/documents/*` - Selection, upload, display set, stats, reset

pub mod auth_routes;
pub mod config;
pub mod document_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
