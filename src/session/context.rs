//! Leptos context wrapper around the browser session store.
//!
//! The root component builds one `AuthContext` and provides it; pages and the
//! route gate read it with [`use_auth`]. Every action re-publishes the
//! store's session into a signal so guarded views re-render.
//!
//! The signal holds `None` until the browser publishes the persisted session
//! from an effect. Effects never run on the server, so server HTML and the
//! first hydration pass both render with the session unknown.

use std::sync::Arc;

use leptos::prelude::*;

use super::state::Session;
use super::storage::BrowserStorage;
use super::store::SessionStore;
use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::net::api::HttpAuthApi;
use crate::net::types::User;

/// Session store as wired in the browser.
pub type BrowserSessionStore = SessionStore<HttpAuthApi, BrowserStorage>;

/// Shared auth context.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<BrowserSessionStore>,
    /// Published session; `None` while not yet known on this render.
    pub session: RwSignal<Option<Session>>,
}

impl AuthContext {
    #[must_use]
    pub fn new(store: BrowserSessionStore) -> Self {
        Self { store: Arc::new(store), session: RwSignal::new(None) }
    }

    /// Build the store from configuration, hydrating from `localStorage`.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(SessionStore::with_storage_key(
            HttpAuthApi::from_config(config),
            BrowserStorage,
            config.storage_key.clone(),
        ))
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let result = self.store.login(username, password).await;
        self.publish();
        result
    }

    /// # Errors
    ///
    /// See [`SessionStore::register`].
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.store.register(username, email, password).await
    }

    /// # Errors
    ///
    /// See [`SessionStore::logout`]. The session signal is cleared either way.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let result = self.store.logout().await;
        self.publish();
        result
    }

    /// # Errors
    ///
    /// See [`SessionStore::refresh`].
    pub async fn refresh(&self) -> Result<Option<User>, AuthError> {
        let result = self.store.refresh().await;
        self.publish();
        result
    }

    fn publish(&self) {
        self.session.set(Some(self.store.session()));
    }
}

/// Provide a fresh auth context built from [`ClientConfig::load`].
///
/// In the browser the persisted session is published after hydration, and a
/// persisted sign-in is then confirmed against the server.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::from_config(&ClientConfig::load());
    provide_context(auth.clone());

    let ctx = auth.clone();
    Effect::new(move || {
        ctx.publish();
        #[cfg(feature = "hydrate")]
        if ctx.store.is_authenticated() {
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                let _ = ctx.refresh().await;
            });
        }
    });

    auth
}

/// Current auth context, or a freshly hydrated one when none was provided.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let auth = AuthContext::from_config(&ClientConfig::load());
        let ctx = auth.clone();
        Effect::new(move || ctx.publish());
        auth
    })
}
