//! Application builder — wires repositories, auth components, and the
//! router into a running Axum server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use portal_auth::{
    AuditRecorder, CredentialVerifier, RbacPolicies, SessionResolver, SessionStore,
    SessionTokenCodec,
};
use portal_core::config::AppConfig;
use portal_core::error::AppError;
use portal_database::repositories::{
    AccountRepository, AuditLogRepository, DocumentRepository, MessageRepository,
    OrganizationRepository, SessionRepository, TicketRepository,
};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let organization_repo = Arc::new(OrganizationRepository::new(db_pool.clone()));
    let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));
    let ticket_repo = Arc::new(TicketRepository::new(db_pool.clone()));
    let message_repo = Arc::new(MessageRepository::new(db_pool.clone()));
    let audit_repo = Arc::new(AuditLogRepository::new(db_pool.clone()));

    let verifier = Arc::new(CredentialVerifier::new(Arc::clone(&account_repo)));
    let codec = Arc::new(SessionTokenCodec::new(&config.auth));
    let store = Arc::new(SessionStore::new(
        Arc::clone(&session_repo),
        config.auth.clone(),
    ));
    let resolver = Arc::new(SessionResolver::new(
        SessionTokenCodec::new(&config.auth),
        SessionStore::new(Arc::clone(&session_repo), config.auth.clone()),
        Arc::clone(&account_repo),
        Arc::clone(&organization_repo),
    ));
    let rbac = Arc::new(RbacPolicies::new());
    let audit = Arc::new(AuditRecorder::new(Arc::clone(&audit_repo)));

    AppState {
        config: Arc::new(config),
        db_pool,
        verifier,
        codec,
        store,
        resolver,
        rbac,
        audit,
        organization_repo,
        account_repo,
        session_repo,
        document_repo,
        ticket_repo,
        message_repo,
        audit_repo,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the portal server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Portal server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
