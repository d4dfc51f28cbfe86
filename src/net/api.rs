//! Auth API client.
//!
//! `AuthApi` is the seam the session store talks through. `HttpAuthApi` is
//! the browser implementation:
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with cookies
//! included so the server session survives across calls.
//! Server-side (SSR) and native builds: every call returns
//! `AuthError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `AuthError::Rejected` carrying the server's
//! `{"error": ...}` message when present, otherwise a trimmed excerpt of the
//! body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, RegisterRequest, User};
use crate::config::ClientConfig;
use crate::error::AuthError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CURRENT_USER_PATH: &str = "/auth/me";

/// Maximum number of error body characters surfaced to the UI.
#[cfg(any(test, feature = "hydrate"))]
const MAX_ERROR_CHARS: usize = 200;

/// Remote authentication endpoints.
///
/// Futures are `?Send`: in the browser they run on the single-threaded
/// `spawn_local` executor.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`; returns the signed-in user.
    async fn login(&self, request: &LoginRequest<'_>) -> Result<User, AuthError>;

    /// `POST /auth/register`; the response body is ignored.
    async fn register(&self, request: &RegisterRequest<'_>) -> Result<(), AuthError>;

    /// `POST /auth/logout`; the response body is ignored.
    async fn logout(&self) -> Result<(), AuthError>;

    /// `GET /auth/me`; returns the user bound to the server session.
    async fn current_user(&self) -> Result<User, AuthError>;
}

/// `gloo-net` implementation of [`AuthApi`].
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest<'_>) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = http::post_json(&self.url(LOGIN_PATH), request).await?;
            let body: super::types::LoginResponse = http::decode(resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_json(&self.url(REGISTER_PATH), request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            http::post_empty(&self.url(LOGOUT_PATH)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    async fn current_user(&self) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = http::get(&self.url(CURRENT_USER_PATH)).await?;
            http::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}

/// Join a base URL and an absolute endpoint path.
#[cfg(any(test, feature = "hydrate"))]
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() { path.to_owned() } else { format!("{base}/{}", path.trim_start_matches('/')) }
}

/// Map a non-2xx response into `AuthError::Rejected`.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &str) -> AuthError {
    let message = match serde_json::from_str::<super::types::ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => parsed.error.trim().to_owned(),
        _ => sanitize_body(body),
    };
    AuthError::Rejected { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() { "Request failed.".to_owned() } else { trimmed.chars().take(MAX_ERROR_CHARS).collect() }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use crate::error::AuthError;

    fn network_error(err: gloo_net::Error) -> AuthError {
        AuthError::Network(err.to_string())
    }

    pub(super) async fn post_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<Response, AuthError> {
        let resp = Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| AuthError::Network(format!("failed to encode request: {e}")))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await
    }

    pub(super) async fn post_empty(url: &str) -> Result<Response, AuthError> {
        let resp = Request::post(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await
    }

    pub(super) async fn get(url: &str) -> Result<Response, AuthError> {
        let resp = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, AuthError> {
        resp.json::<T>().await.map_err(|e| AuthError::Decode(e.to_string()))
    }

    async fn ensure_ok(resp: Response) -> Result<Response, AuthError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(super::rejection(status, &body))
    }
}
