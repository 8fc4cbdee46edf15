//! Server-side session lifecycle and cookie resolution.

pub mod resolver;
pub mod store;

pub use resolver::{ResolvedSession, SessionResolver};
pub use store::SessionStore;
