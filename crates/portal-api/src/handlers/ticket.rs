//! Request ticket handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use portal_auth::Permission;
use portal_core::error::AppError;
use portal_entity::audit::CreateAuditLogEntry;
use portal_entity::ticket::{CreateRequestTicket, RequestTicket, TicketPriority};

use crate::dto::request::CreateTicketRequest;
use crate::dto::response::TicketDetailResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::handlers::document::require;
use crate::state::AppState;

/// GET /api/requests
pub async fn list_tickets(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<RequestTicket>>, ApiError> {
    require(&state, &auth, Permission::RequestsRead)?;

    let tickets = state
        .ticket_repo
        .find_by_organization(auth.organization.id)
        .await?;
    Ok(Json(tickets))
}

/// GET /api/requests/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<TicketDetailResponse>, ApiError> {
    require(&state, &auth, Permission::RequestsRead)?;

    let ticket = state
        .ticket_repo
        .find_in_organization(id, auth.organization.id)
        .await?
        .ok_or_else(|| AppError::not_found("Ticket not found"))?;
    let events = state.ticket_repo.find_events(ticket.id).await?;

    Ok(Json(TicketDetailResponse { ticket, events }))
}

/// POST /api/requests
pub async fn create_ticket(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<RequestTicket>), ApiError> {
    require(&state, &auth, Permission::RequestsWrite)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let priority = match &req.priority {
        Some(p) => p.parse::<TicketPriority>()?,
        None => TicketPriority::Medium,
    };

    let ticket = state
        .ticket_repo
        .create(&CreateRequestTicket {
            organization_id: auth.organization.id,
            created_by_id: auth.account.id,
            subject: req.subject,
            description: req.description,
            priority,
        })
        .await?;

    state
        .audit
        .record(CreateAuditLogEntry {
            organization_id: auth.organization.id,
            actor_id: Some(auth.account.id),
            action: "ticket_created".to_string(),
            entity_type: "ticket".to_string(),
            entity_id: Some(ticket.id),
            ip_address: auth.session.ip_address.clone(),
            metadata: None,
        })
        .await;

    Ok((StatusCode::CREATED, Json(ticket)))
}
