//! Session store: login, register, logout and refresh against the auth API,
//! mirrored into persisted storage.
//!
//! LIFECYCLE
//! =========
//! - Construction hydrates the session from the storage key (default `user`).
//!   Unreadable or corrupt entries are treated as signed out.
//! - `login` replaces the user wholesale and persists it.
//! - `logout` always tears the local session down, whatever the server says.
//! - `register` never touches the session.
//!
//! Overlapping actions are not coordinated; the last one to finish wins. The
//! state lock is only held for a read or a swap, never across an await.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{PoisonError, RwLock};

use log::{debug, warn};

use super::state::Session;
use super::storage::SessionStorage;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, RegisterRequest, User};

/// Explicitly constructed session context.
#[derive(Debug)]
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    storage_key: String,
    state: RwLock<Session>,
}

impl<A: AuthApi, S: SessionStorage> SessionStore<A, S> {
    /// Build a store hydrated from the default `user` storage key.
    pub fn new(api: A, storage: S) -> Self {
        Self::with_storage_key(api, storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_storage_key(api: A, storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let session = load_session(&storage, &storage_key);
        debug!("session hydrated: authenticated={}", session.is_authenticated());
        Self { api, storage, storage_key, state: RwLock::new(session) }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn user(&self) -> Option<User> {
        self.session().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).is_admin()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Sign in with username and password.
    ///
    /// On success the returned user replaces the session and is persisted. On
    /// failure the session is left as it was.
    ///
    /// # Errors
    ///
    /// `MissingFields` for empty input, otherwise whatever the API reports.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let result = self.try_login(username, password).await;
        if let Err(err) = &result {
            warn!("login failed: {err}");
        }
        result
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        require_fields(&[username, password])?;
        let user = self.api.login(&LoginRequest { username, password }).await?;
        self.establish(user.clone());
        Ok(user)
    }

    /// Create an account. Registration does not sign the user in.
    ///
    /// # Errors
    ///
    /// `MissingFields` for empty input, otherwise whatever the API reports.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let result = match require_fields(&[username, email, password]) {
            Ok(()) => self.api.register(&RegisterRequest { username, email, password }).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            warn!("registration failed: {err}");
        }
        result
    }

    /// Sign out. The local session is cleared even when the server call fails.
    ///
    /// # Errors
    ///
    /// Reports the server call's failure after local teardown has completed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let result = self.api.logout().await;
        if let Err(err) = &result {
            warn!("logout failed: {err}");
        }
        self.clear();
        result
    }

    /// Re-read the signed-in user from the server session.
    ///
    /// `Ok(Some(user))` replaces the local user (the server owns `is_admin`);
    /// `Ok(None)` means the server session is gone and the local one was
    /// cleared. Transport failures leave the session untouched.
    ///
    /// # Errors
    ///
    /// Any API failure other than a 401.
    pub async fn refresh(&self) -> Result<Option<User>, AuthError> {
        match self.api.current_user().await {
            Ok(user) => {
                self.establish(user.clone());
                Ok(Some(user))
            }
            Err(err) if err.is_unauthorized() => {
                debug!("server session expired; clearing local session");
                self.clear();
                Ok(None)
            }
            Err(err) => {
                warn!("session refresh failed: {err}");
                Err(err)
            }
        }
    }

    fn establish(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(&self.storage_key, &raw) {
                    warn!("could not persist session: {err}");
                }
            }
            Err(err) => warn!("could not encode session: {err}"),
        }
        debug!("session established for {}", user.display_name());
        self.replace(Session::signed_in(user));
    }

    fn clear(&self) {
        self.replace(Session::anonymous());
        if let Err(err) = self.storage.remove(&self.storage_key) {
            warn!("could not remove persisted session: {err}");
        }
        debug!("session cleared");
    }

    fn replace(&self, session: Session) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

fn load_session<S: SessionStorage>(storage: &S, key: &str) -> Session {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Session::anonymous(),
        Err(err) => {
            warn!("could not read persisted session: {err}");
            return Session::anonymous();
        }
    };
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Session::signed_in(user),
        Err(err) => {
            warn!("discarding unreadable persisted session: {err}");
            let _ = storage.remove(key);
            Session::anonymous()
        }
    }
}

fn require_fields(fields: &[&str]) -> Result<(), AuthError> {
    if fields.iter().any(|f| f.is_empty()) { Err(AuthError::MissingFields) } else { Ok(()) }
}
