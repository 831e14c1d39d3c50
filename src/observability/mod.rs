//! # Observability
//!
//! Structured JSON logging: synchronous, one line per event,
//! deterministic field ordering. The only telemetry a demo service
//! needs.

pub mod logger;

pub use logger::{Logger, Severity};
