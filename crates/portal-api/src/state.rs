//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use portal_auth::{
    AuditRecorder, CredentialVerifier, RbacPolicies, SessionResolver, SessionStore,
    SessionTokenCodec,
};
use portal_core::config::AppConfig;
use portal_database::repositories::{
    AccountRepository, AuditLogRepository, DocumentRepository, MessageRepository,
    OrganizationRepository, SessionRepository, TicketRepository,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Credential verifier
    pub verifier: Arc<CredentialVerifier>,
    /// Session token codec
    pub codec: Arc<SessionTokenCodec>,
    /// Server-side session store
    pub store: Arc<SessionStore>,
    /// Cookie-to-identity resolver
    pub resolver: Arc<SessionResolver>,
    /// Role-to-permission policy tables
    pub rbac: Arc<RbacPolicies>,
    /// Fire-and-forget audit recorder
    pub audit: Arc<AuditRecorder>,

    // ── Repositories ─────────────────────────────────────────
    /// Organization repository
    pub organization_repo: Arc<OrganizationRepository>,
    /// Client account repository
    pub account_repo: Arc<AccountRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,
    /// Document repository
    pub document_repo: Arc<DocumentRepository>,
    /// Request ticket repository
    pub ticket_repo: Arc<TicketRepository>,
    /// Message thread repository
    pub message_repo: Arc<MessageRepository>,
    /// Audit log repository
    pub audit_repo: Arc<AuditLogRepository>,
}
