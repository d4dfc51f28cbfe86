//! Client-side routing: route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares the routes with `leptos_router`, which matches paths and
//! lazily loads route views. The `/admin` subtree renders through
//! `components::route_gate::RouteGate`, which asks `guard` about the current
//! session using the metadata `table` says the route inherits.

pub mod guard;
pub mod table;

pub use guard::GuardDecision;
pub use table::{Route, RouteMeta, RouteName, ViewLoad};
