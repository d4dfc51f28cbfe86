//! Pre-navigation guard.
//!
//! Runs once per navigation attempt against the inherited metadata of the
//! target route:
//! 1. auth required and nobody signed in: go to login.
//! 2. admin required and the user is not an admin (or absent): go home.
//! 3. otherwise proceed.
//!
//! The session is unknown while rendering on the server and during the first
//! hydration pass. Guarded routes stay pending until it is known, so the
//! server never redirects a visitor whose session only the browser holds.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::RouteMeta;
use crate::session::Session;

/// Outcome of the guard for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
    RedirectHome,
}

impl GuardDecision {
    /// Path to redirect to, if any.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Proceed => None,
            Self::RedirectToLogin => Some("/login"),
            Self::RedirectHome => Some("/"),
        }
    }
}

/// Decide whether `session` may enter a route with `meta`.
#[must_use]
pub fn check_meta(meta: RouteMeta, session: &Session) -> GuardDecision {
    if meta.requires_auth && !session.is_authenticated() {
        GuardDecision::RedirectToLogin
    } else if meta.requires_admin && !session.is_admin() {
        GuardDecision::RedirectHome
    } else {
        GuardDecision::Proceed
    }
}

/// Like [`check_meta`], for a session that may not be known yet.
///
/// Public routes proceed regardless. Guarded routes return `None` (pending)
/// until `session` is `Some`.
#[must_use]
pub fn admission(meta: RouteMeta, session: Option<&Session>) -> Option<GuardDecision> {
    if meta == RouteMeta::PUBLIC {
        return Some(GuardDecision::Proceed);
    }
    session.map(|session| check_meta(meta, session))
}
