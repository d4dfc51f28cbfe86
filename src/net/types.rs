//! Wire types for the `/auth/*` endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Signed-in user as returned by the server and persisted in storage.
///
/// The record is opaque: only `is_admin` matters to the client. Fields the
/// client does not name are kept in `extra`, so a stored record serializes
/// back exactly as the server sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Admin flag; a record without one is not an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }

    /// Name to show in the UI.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("account")
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Success body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Error body returned by the server on 4xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
