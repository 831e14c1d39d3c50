//! # Session Module
//!
//! Authentication gate for the single demo account plus the injected
//! session store that stands in for ambient browser storage. The gate
//! decides which view is active; it has no access to document state.

pub mod errors;
pub mod gate;
pub mod store;

pub use errors::{SessionError, SessionResult};
pub use gate::{DemoCredentials, SessionGate};
pub use store::{FileSessionStore, InMemorySessionStore, SessionStore, UserProfile};
