//! jprat - A demo document-verification service
//!
//! A single fixed account logs in, selects identity documents, uploads
//! files, and watches a simulated review move each document from
//! pending to uploaded to verified after a fixed delay. The review is
//! a timer; no file content is ever inspected or stored.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod session;
pub mod tracking;
