//! # portal-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for the Altevo client portal.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
