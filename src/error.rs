//! Error type shared by the auth API client and the session store.
//!
//! ERROR HANDLING
//! ==============
//! Every store action returns `Result<_, AuthError>` so pages decide what to
//! show. The store logs each failure once; callers never need to.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of an auth action or of session persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing required fields")]
    MissingFields,
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl AuthError {
    /// True when the server answered 401, i.e. there is no valid server session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401, .. })
    }

    /// Short message suitable for a form status line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields => "Please fill in all fields.".to_owned(),
            Self::Network(_) => "Unable to reach the server. Please try again.".to_owned(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Storage(_) => "Your browser blocked local storage.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}
