//! Networking modules for the auth HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `AuthApi` seam and its `gloo-net` implementation;
//! `types` defines the JSON wire schema.

pub mod api;
pub mod types;
