//! Organization (tenant) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tenant organization. Every account, document, ticket, thread, and audit
/// entry belongs to exactly one organization; all portal queries are scoped
/// by it. Organizations are never deleted during normal operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organization {
    /// Unique organization identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL-safe unique slug.
    pub slug: String,
    /// When the organization was created.
    pub created_at: DateTime<Utc>,
}
