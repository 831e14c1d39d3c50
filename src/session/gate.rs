//! # Session Gate
//!
//! Holds the authenticated/unauthenticated flag and the current user
//! identity, gated by one fixed demo account. The gate owns nothing
//! else: document state belongs to the tracking engine and is
//! deliberately left untouched by logout.
//!
//! ## Invariants
//! - SES-G1: Credentials are compared in constant time
//! - SES-G2: A failed login changes no state
//! - SES-G3: Logout clears the flag, the profile, and the store, and
//!   nothing else

use std::sync::RwLock;

use subtle::ConstantTimeEq;

use crate::observability::Logger;

use super::errors::{SessionError, SessionResult};
use super::store::{SessionStore, UserProfile};

/// Constant-time string comparison for credential checks
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// The single fixed account the demo accepts.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "admin@jprat.gov.in".to_string(),
            password: "jprat2024".to_string(),
            name: "Dr. Rajesh Kumar".to_string(),
            role: "Authorized Officer".to_string(),
        }
    }
}

impl DemoCredentials {
    fn profile(&self) -> UserProfile {
        UserProfile {
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Authentication gate for the demo session.
pub struct SessionGate<S: SessionStore> {
    credentials: DemoCredentials,
    store: S,
    current: RwLock<Option<UserProfile>>,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(credentials: DemoCredentials, store: S) -> Self {
        Self {
            credentials,
            store,
            current: RwLock::new(None),
        }
    }

    /// Read the store once and resume any saved session.
    ///
    /// Called at startup, mirroring the browser reading its storage on
    /// mount. Returns the resumed profile, if any.
    pub fn restore(&self) -> SessionResult<Option<UserProfile>> {
        let saved = self.store.load()?;
        if let Some(profile) = &saved {
            let mut current = self.write()?;
            *current = Some(profile.clone());
            Logger::info("session_restored", &[("email", &profile.email)]);
        }
        Ok(saved)
    }

    /// Check credentials and open the session.
    ///
    /// Both fields are compared in constant time and combined without
    /// short-circuiting, so timing never reveals which one was wrong.
    /// A failed login leaves the gate and the store untouched.
    pub fn login(&self, email: &str, password: &str) -> SessionResult<UserProfile> {
        let email_ok = constant_time_str_eq(email, &self.credentials.email);
        let password_ok = constant_time_str_eq(password, &self.credentials.password);

        if !(email_ok & password_ok) {
            Logger::warn("login_rejected", &[]);
            return Err(SessionError::InvalidCredentials);
        }

        let profile = self.credentials.profile();
        self.store.save(&profile)?;
        {
            let mut current = self.write()?;
            *current = Some(profile.clone());
        }

        Logger::info("login_ok", &[("email", &profile.email)]);
        Ok(profile)
    }

    /// Close the session: clear the flag, the profile, and the store.
    ///
    /// Document state is intentionally not cleared; a later login
    /// resumes the same tracking state.
    pub fn logout(&self) -> SessionResult<()> {
        self.store.clear()?;
        let mut current = self.write()?;
        *current = None;
        Logger::info("logout", &[]);
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .map(|current| current.is_some())
            .unwrap_or(false)
    }

    /// The authenticated user, or `NotAuthenticated`.
    pub fn current_user(&self) -> SessionResult<UserProfile> {
        let current = self
            .current
            .read()
            .map_err(|_| SessionError::Internal("Lock poisoned".to_string()))?;
        current.clone().ok_or(SessionError::NotAuthenticated)
    }

    fn write(&self) -> SessionResult<std::sync::RwLockWriteGuard<'_, Option<UserProfile>>> {
        self.current
            .write()
            .map_err(|_| SessionError::Internal("Lock poisoned".to_string()))
    }
}
