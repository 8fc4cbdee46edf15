//! # portal-entity
//!
//! Domain entity models for the Altevo client portal. Every struct in this
//! crate represents a database table row. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod account;
pub mod audit;
pub mod document;
pub mod message;
pub mod organization;
pub mod session;
pub mod ticket;
