//! Client-side authentication session.
//!
//! DESIGN
//! ======
//! `Session` is the plain state value, `SessionStore` owns it together with the
//! `AuthApi` and `SessionStorage` it mirrors into, and `context` shares one
//! store through Leptos context. There is no global instance: the root
//! component constructs the store and hands it down.

pub mod context;
pub mod state;
pub mod storage;
pub mod store;

pub use state::Session;
pub use storage::{BrowserStorage, MemoryStorage, SessionStorage};
pub use store::SessionStore;
