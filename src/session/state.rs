//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation guard and by user-aware pages. `authenticated` is
//! derived from the presence of a user, so the two cannot disagree.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::types::User;

/// Snapshot of who is signed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name to show for the signed-in user; empty when nobody is.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default()
    }

    /// Admin flag of the current user; `false` when nobody is signed in.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}
