//! Message thread handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use portal_auth::Permission;
use portal_core::error::AppError;
use portal_entity::message::{Message, MessageThread};

use crate::dto::request::PostMessageRequest;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::handlers::document::require;
use crate::state::AppState;

/// A thread with its messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDetailResponse {
    /// The thread.
    #[serde(flatten)]
    pub thread: MessageThread,
    /// Messages, oldest first.
    pub messages: Vec<Message>,
}

/// GET /api/messages
pub async fn list_threads(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<MessageThread>>, ApiError> {
    require(&state, &auth, Permission::MessagesRead)?;

    let threads = state
        .message_repo
        .find_threads_by_organization(auth.organization.id)
        .await?;
    Ok(Json(threads))
}

/// GET /api/messages/{id}
pub async fn get_thread(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ThreadDetailResponse>, ApiError> {
    require(&state, &auth, Permission::MessagesRead)?;

    let thread = state
        .message_repo
        .find_thread_in_organization(id, auth.organization.id)
        .await?
        .ok_or_else(|| AppError::not_found("Thread not found"))?;
    let messages = state.message_repo.find_messages(thread.id).await?;

    Ok(Json(ThreadDetailResponse { thread, messages }))
}

/// POST /api/messages/{id}
pub async fn post_message(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
    Json(req): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    require(&state, &auth, Permission::MessagesWrite)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // Posting into another tenant's thread is indistinguishable from a
    // missing thread.
    let thread = state
        .message_repo
        .find_thread_in_organization(id, auth.organization.id)
        .await?
        .ok_or_else(|| AppError::not_found("Thread not found"))?;

    let message = state
        .message_repo
        .create_message(thread.id, Some(auth.account.id), &req.body)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
