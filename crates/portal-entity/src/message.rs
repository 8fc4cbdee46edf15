//! Message thread and message entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A conversation thread between an organization and its account team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MessageThread {
    /// Unique thread identifier.
    pub id: Uuid,
    /// The owning organization.
    pub organization_id: Uuid,
    /// Thread subject line.
    pub subject: String,
    /// When the thread was opened.
    pub created_at: DateTime<Utc>,
}

/// A single message inside a thread.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// The thread this message belongs to.
    pub thread_id: Uuid,
    /// The account that wrote the message, if authored client-side.
    pub author_id: Option<Uuid>,
    /// Message body.
    pub body: String,
    /// When the message was sent.
    pub created_at: DateTime<Utc>,
}
