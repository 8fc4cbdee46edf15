//! Audit history handler.

use axum::Json;
use axum::extract::State;

use portal_auth::Permission;
use portal_entity::audit::AuditLogEntry;

use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::handlers::document::require;
use crate::state::AppState;

const AUDIT_PAGE_SIZE: i64 = 100;

/// GET /api/audit
pub async fn list_audit_entries(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<AuditLogEntry>>, ApiError> {
    require(&state, &auth, Permission::AuditRead)?;

    let entries = state
        .audit_repo
        .find_by_organization(auth.organization.id, AUDIT_PAGE_SIZE)
        .await?;
    Ok(Json(entries))
}
