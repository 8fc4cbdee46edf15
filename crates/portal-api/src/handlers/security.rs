//! Security page handler — a user's session history.

use axum::Json;
use axum::extract::State;

use portal_auth::Permission;

use crate::dto::response::SessionSummaryResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::handlers::document::require;
use crate::state::AppState;

/// GET /api/security/sessions
///
/// Lists the caller's own sessions, newest first, with the one making
/// the request flagged as `current`. The opaque session tokens are
/// never included.
pub async fn list_sessions(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<Vec<SessionSummaryResponse>>, ApiError> {
    require(&state, &auth, Permission::SecurityRead)?;

    let sessions = state.session_repo.find_by_account(auth.account.id).await?;
    let summaries = sessions
        .iter()
        .map(|s| SessionSummaryResponse::from_session(s, auth.session.id))
        .collect();
    Ok(Json(summaries))
}
