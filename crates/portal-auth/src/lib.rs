//! Authentication and authorization for the Altevo client portal.
//!
//! This crate owns the full login lifecycle: password verification,
//! session persistence, signed token issuance and verification, cookie
//! resolution into a tenant context, role-based access control, and
//! audit recording.

pub mod audit;
pub mod credentials;
pub mod password;
pub mod rbac;
pub mod session;
pub mod token;

pub use audit::AuditRecorder;
pub use credentials::CredentialVerifier;
pub use password::PasswordHasher;
pub use rbac::{Permission, RbacPolicies};
pub use session::{ResolvedSession, SessionResolver, SessionStore};
pub use token::{SessionClaims, SessionTokenCodec, TokenError};
