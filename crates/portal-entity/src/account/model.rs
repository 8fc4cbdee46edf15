//! Client account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::AccountRole;

/// A login principal belonging to exactly one organization.
///
/// Accounts are created by provisioning (seed or admin action) and
/// deactivated rather than deleted; deactivation invalidates all future
/// session resolution for the account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientAccount {
    /// Unique account identifier.
    pub id: Uuid,
    /// The organization this account belongs to.
    pub organization_id: Uuid,
    /// Full display name.
    pub name: String,
    /// Email address, globally unique, stored lowercase.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role (RBAC).
    pub role: AccountRole,
    /// Whether the account may log in and resolve sessions.
    pub is_active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to provision a new client account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientAccount {
    /// The owning organization.
    pub organization_id: Uuid,
    /// Full display name.
    pub name: String,
    /// Email address (normalized to lowercase before insert).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: AccountRole,
}
