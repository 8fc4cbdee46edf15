//! Client account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use portal_core::error::{AppError, ErrorKind};
use portal_core::result::AppResult;
use portal_entity::account::{ClientAccount, CreateClientAccount};

/// Repository for client account CRUD and lookups.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ClientAccount>> {
        sqlx::query_as::<_, ClientAccount>("SELECT * FROM client_accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find account", e))
    }

    /// Find an account by email. The caller must lowercase the email first;
    /// the column stores normalized values.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<ClientAccount>> {
        sqlx::query_as::<_, ClientAccount>("SELECT * FROM client_accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    /// Provision a new account.
    pub async fn create(&self, data: &CreateClientAccount) -> AppResult<ClientAccount> {
        sqlx::query_as::<_, ClientAccount>(
            "INSERT INTO client_accounts (organization_id, name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.organization_id)
        .bind(&data.name)
        .bind(data.email.to_lowercase())
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create account", e))
    }

    /// Activate or deactivate an account. Deactivation takes effect on the
    /// next session resolution; no session rows are touched here.
    pub async fn set_active(&self, id: Uuid, active: bool) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE client_accounts SET is_active = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update account status", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {id} not found")));
        }
        Ok(())
    }

    /// List accounts belonging to an organization.
    pub async fn find_by_organization(&self, organization_id: Uuid) -> AppResult<Vec<ClientAccount>> {
        sqlx::query_as::<_, ClientAccount>(
            "SELECT * FROM client_accounts WHERE organization_id = $1 ORDER BY name",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))
    }
}
