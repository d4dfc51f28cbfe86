//! Reusable UI components shared across pages.

pub mod logout_button;
pub mod route_gate;
pub mod session_badge;
