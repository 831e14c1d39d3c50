//! # Session Store
//!
//! Persistence seam for the authenticated-session flag. The gate never
//! touches ambient storage directly; it goes through this trait, so
//! tests run in memory and the binary survives restarts with a JSON
//! file.
//!
//! ## Invariants
//! - SES-S1: `load` after `save(p)` returns `p` until `clear`
//! - SES-S2: `clear` is idempotent

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::errors::{SessionError, SessionResult};

/// The identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Where the session flag lives between operations.
pub trait SessionStore: Send + Sync {
    /// Read the saved session, if any
    fn load(&self) -> SessionResult<Option<UserProfile>>;

    /// Persist the session
    fn save(&self, profile: &UserProfile) -> SessionResult<()>;

    /// Remove any saved session
    fn clear(&self) -> SessionResult<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn load(&self) -> SessionResult<Option<UserProfile>> {
        (**self).load()
    }

    fn save(&self, profile: &UserProfile) -> SessionResult<()> {
        (**self).save(profile)
    }

    fn clear(&self) -> SessionResult<()> {
        (**self).clear()
    }
}

/// In-memory session store for testing
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> SessionResult<Option<UserProfile>> {
        let profile = self
            .profile
            .read()
            .map_err(|_| SessionError::Internal("Lock poisoned".to_string()))?;
        Ok(profile.clone())
    }

    fn save(&self, profile: &UserProfile) -> SessionResult<()> {
        let mut slot = self
            .profile
            .write()
            .map_err(|_| SessionError::Internal("Lock poisoned".to_string()))?;
        *slot = Some(profile.clone());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        let mut slot = self
            .profile
            .write()
            .map_err(|_| SessionError::Internal("Lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// JSON-file-backed session store.
///
/// One small file holding the serialized profile. A missing file means
/// no saved session; a corrupt file is reported as a store failure
/// rather than silently treated as logged out.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the OS temp dir, matching the demo's throwaway
    /// persistence expectations.
    pub fn with_default_path() -> Self {
        Self::new(std::env::temp_dir().join("jprat_session.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionResult<Option<UserProfile>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::StoreFailure(e.to_string())),
        };

        let profile = serde_json::from_str(&contents)
            .map_err(|e| SessionError::StoreFailure(e.to_string()))?;
        Ok(Some(profile))
    }

    fn save(&self, profile: &UserProfile) -> SessionResult<()> {
        let contents = serde_json::to_string_pretty(profile)
            .map_err(|e| SessionError::StoreFailure(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| SessionError::StoreFailure(e.to_string()))
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::StoreFailure(e.to_string())),
        }
    }
}
