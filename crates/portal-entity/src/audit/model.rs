//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable audit log entry recording a security-relevant action.
///
/// Entries are append-only facts: never mutated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The organization the action happened in.
    pub organization_id: Uuid,
    /// The account that performed the action. `None` for system actions.
    pub actor_id: Option<Uuid>,
    /// The action that was performed (e.g., `"login"`, `"logout"`).
    pub action: String,
    /// The type of target entity (e.g., `"session"`, `"document"`).
    pub entity_type: String,
    /// The target entity ID, if applicable.
    pub entity_id: Option<Uuid>,
    /// IP address of the actor.
    pub ip_address: Option<String>,
    /// Additional structured details about the action.
    pub metadata: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The organization the action happened in.
    pub organization_id: Uuid,
    /// The acting account, if any.
    pub actor_id: Option<Uuid>,
    /// The action performed.
    pub action: String,
    /// Target entity type.
    pub entity_type: String,
    /// Target entity ID.
    pub entity_id: Option<Uuid>,
    /// Actor's IP address.
    pub ip_address: Option<String>,
    /// Additional structured details.
    pub metadata: Option<serde_json::Value>,
}
