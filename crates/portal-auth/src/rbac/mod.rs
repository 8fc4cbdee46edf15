//! Role-based access control.

pub mod policies;

pub use policies::{Permission, RbacPolicies};
