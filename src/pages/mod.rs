//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Entry pages (home, login, register) are plain components bundled with the
//! app. Article and admin screens are `LazyRoute`s whose views load on the
//! first navigation to them.

pub mod admin;
pub mod article;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
