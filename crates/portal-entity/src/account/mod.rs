//! Client account entity and role enum.

pub mod model;
pub mod role;

pub use model::{ClientAccount, CreateClientAccount};
pub use role::AccountRole;
