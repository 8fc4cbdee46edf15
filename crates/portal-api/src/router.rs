//! Route definitions for the portal HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use portal_core::config::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(document_routes())
        .merge(ticket_routes())
        .merge(message_routes())
        .merge(audit_routes())
        .merge(security_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, logout, session introspection
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::introspect))
}

/// Tenant-scoped document reads
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(handlers::document::list_documents))
        .route("/documents/{id}", get(handlers::document::get_document))
}

/// Support request tickets
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            get(handlers::ticket::list_tickets).post(handlers::ticket::create_ticket),
        )
        .route("/requests/{id}", get(handlers::ticket::get_ticket))
}

/// Message threads
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(handlers::message::list_threads))
        .route(
            "/messages/{id}",
            get(handlers::message::get_thread).post(handlers::message::post_message),
        )
}

/// Audit history
fn audit_routes() -> Router<AppState> {
    Router::new().route("/audit", get(handlers::audit::list_audit_entries))
}

/// Security page: the caller's session history
fn security_routes() -> Router<AppState> {
    Router::new().route(
        "/security/sessions",
        get(handlers::security::list_sessions),
    )
}

/// Liveness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    layer.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
