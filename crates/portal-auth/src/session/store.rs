//! Server-side session store backed by Postgres.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use portal_core::config::AuthConfig;
use portal_core::result::AppResult;
use portal_database::repositories::SessionRepository;
use portal_entity::session::Session;

/// Creates, looks up, and revokes server-side session records.
///
/// The store is the authority on session liveness: a token that passes
/// signature checks is still dead if its row is revoked or missing.
#[derive(Debug, Clone)]
pub struct SessionStore {
    repo: Arc<SessionRepository>,
    config: AuthConfig,
}

impl SessionStore {
    /// Create a new session store.
    pub fn new(repo: Arc<SessionRepository>, config: AuthConfig) -> Self {
        Self { repo, config }
    }

    /// Create a session for an account with a fresh opaque token and the
    /// configured lifetime.
    pub async fn create(
        &self,
        account_id: Uuid,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> AppResult<Session> {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            account_id,
            token: Uuid::new_v4().to_string(),
            issued_at: now,
            expires_at: now + Duration::seconds(self.config.session_lifetime_seconds()),
            revoked_at: None,
            ip_address,
            user_agent,
        };
        self.repo.create(&session).await?;
        Ok(session)
    }

    /// Look up a session by its opaque token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        self.repo.find_by_token(token).await
    }

    /// Revoke the session holding the given token. Revoking a token that
    /// is already revoked or unknown is a no-op.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        self.repo.revoke(token).await
    }
}
