//! Request ticket repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;
use portal_entity::ticket::{CreateRequestTicket, RequestTicket, TicketEvent};

/// Repository for tenant-scoped ticket reads and creation.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List an organization's tickets, newest first.
    pub async fn find_by_organization(&self, organization_id: Uuid) -> AppResult<Vec<RequestTicket>> {
        sqlx::query_as::<_, RequestTicket>(
            "SELECT * FROM request_tickets WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tickets", e))
    }

    /// Find a ticket by ID within an organization.
    pub async fn find_in_organization(
        &self,
        id: Uuid,
        organization_id: Uuid,
    ) -> AppResult<Option<RequestTicket>> {
        sqlx::query_as::<_, RequestTicket>(
            "SELECT * FROM request_tickets WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ticket", e))
    }

    /// Open a new ticket.
    pub async fn create(&self, data: &CreateRequestTicket) -> AppResult<RequestTicket> {
        sqlx::query_as::<_, RequestTicket>(
            "INSERT INTO request_tickets (organization_id, created_by_id, subject, description, priority) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.organization_id)
        .bind(data.created_by_id)
        .bind(&data.subject)
        .bind(&data.description)
        .bind(data.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create ticket", e))
    }

    /// List a ticket's timeline events, oldest first.
    pub async fn find_events(&self, ticket_id: Uuid) -> AppResult<Vec<TicketEvent>> {
        sqlx::query_as::<_, TicketEvent>(
            "SELECT * FROM ticket_events WHERE ticket_id = $1 ORDER BY created_at ASC",
        )
        .bind(ticket_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ticket events", e))
    }

    /// Append a timeline event to a ticket.
    pub async fn create_event(
        &self,
        ticket_id: Uuid,
        kind: &str,
        body: &str,
        author_id: Option<Uuid>,
    ) -> AppResult<TicketEvent> {
        sqlx::query_as::<_, TicketEvent>(
            "INSERT INTO ticket_events (ticket_id, kind, body, author_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(ticket_id)
        .bind(kind)
        .bind(body)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create ticket event", e))
    }
}
