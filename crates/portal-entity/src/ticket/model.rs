//! Request ticket and ticket event entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{TicketPriority, TicketStatus};

/// A support request ticket raised by a client account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RequestTicket {
    /// Unique ticket identifier.
    pub id: Uuid,
    /// The owning organization.
    pub organization_id: Uuid,
    /// The account that opened the ticket.
    pub created_by_id: Uuid,
    /// Short subject line.
    pub subject: String,
    /// Full description.
    pub description: String,
    /// Current lifecycle state.
    pub status: TicketStatus,
    /// Priority level.
    pub priority: TicketPriority,
    /// When the ticket was opened.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to open a new ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestTicket {
    /// The owning organization.
    pub organization_id: Uuid,
    /// The opening account.
    pub created_by_id: Uuid,
    /// Subject line.
    pub subject: String,
    /// Full description.
    pub description: String,
    /// Priority level.
    pub priority: TicketPriority,
}

/// An event on a ticket's timeline (comment or status change).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// The ticket this event belongs to.
    pub ticket_id: Uuid,
    /// Event kind: `comment` or `status_change`.
    pub kind: String,
    /// Event body (comment text or new status).
    pub body: String,
    /// The account that produced the event, if any.
    pub author_id: Option<Uuid>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}
