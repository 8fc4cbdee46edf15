//! Document handlers — tenant-scoped reads.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use portal_auth::Permission;
use portal_core::error::AppError;
use portal_entity::document::Document;

use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<Document>>, ApiError> {
    require(&state, &auth, Permission::DocumentsRead)?;

    let documents = state
        .document_repo
        .find_by_organization(auth.organization.id)
        .await?;
    Ok(Json(documents))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError> {
    require(&state, &auth, Permission::DocumentsRead)?;

    let document = state
        .document_repo
        .find_in_organization(id, auth.organization.id)
        .await?
        .ok_or_else(|| AppError::not_found("Document not found"))?;
    Ok(Json(document))
}

/// Permission gate shared by the portal handlers in this module.
pub(crate) fn require(
    state: &AppState,
    auth: &AuthSession,
    permission: Permission,
) -> Result<(), ApiError> {
    if state.rbac.has_permission(auth.account.role, permission) {
        Ok(())
    } else {
        Err(ApiError(AppError::authorization("Insufficient permissions")))
    }
}
