//! HTTP API for the Altevo client portal.
//!
//! Exposes cookie-authenticated endpoints for login, logout, session
//! introspection, and tenant-scoped portal data.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
