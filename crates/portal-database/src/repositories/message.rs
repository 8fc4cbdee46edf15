//! Message thread repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;
use portal_entity::message::{Message, MessageThread};

/// Repository for tenant-scoped message threads.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List an organization's threads, newest first.
    pub async fn find_threads_by_organization(
        &self,
        organization_id: Uuid,
    ) -> AppResult<Vec<MessageThread>> {
        sqlx::query_as::<_, MessageThread>(
            "SELECT * FROM message_threads WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list threads", e))
    }

    /// Find a thread by ID within an organization.
    pub async fn find_thread_in_organization(
        &self,
        id: Uuid,
        organization_id: Uuid,
    ) -> AppResult<Option<MessageThread>> {
        sqlx::query_as::<_, MessageThread>(
            "SELECT * FROM message_threads WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find thread", e))
    }

    /// List a thread's messages, oldest first.
    pub async fn find_messages(&self, thread_id: Uuid) -> AppResult<Vec<Message>> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE thread_id = $1 ORDER BY created_at ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list messages", e))
    }

    /// Append a message to a thread.
    pub async fn create_message(
        &self,
        thread_id: Uuid,
        author_id: Option<Uuid>,
        body: &str,
    ) -> AppResult<Message> {
        sqlx::query_as::<_, Message>(
            "INSERT INTO messages (thread_id, author_id, body) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(thread_id)
        .bind(author_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create message", e))
    }
}
