//! Auth handlers — login, logout, session introspection.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use portal_auth::SessionClaims;
use portal_core::error::AppError;
use portal_entity::audit::CreateAuditLogEntry;

use crate::dto::request::LoginRequest;
use crate::dto::response::{IntrospectionResponse, LoginResponse, MessageResponse, SessionUserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Verifies credentials, creates a server-side session, and sets the
/// session cookie on success.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let account = state.verifier.verify(&req.email, &req.password).await?;

    // Resolve the organization before persisting anything so a broken
    // account cannot leave a live session behind.
    let organization = state
        .organization_repo
        .find_by_id(account.organization_id)
        .await?
        .ok_or_else(|| AppError::internal("Account has no organization"))?;

    let ip_address = client_ip(&headers);
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let session = state
        .store
        .create(account.id, ip_address.clone(), user_agent)
        .await?;

    let claims = SessionClaims::for_session(&session, &account);
    let token = state.codec.issue(&claims)?;

    state
        .audit
        .record(CreateAuditLogEntry {
            organization_id: account.organization_id,
            actor_id: Some(account.id),
            action: "login".to_string(),
            entity_type: "session".to_string(),
            entity_id: Some(session.id),
            ip_address,
            metadata: None,
        })
        .await;

    let jar = jar.add(session_cookie(&state, token));

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            user: SessionUserResponse::from_account(&account, &organization),
        }),
    ))
}

/// POST /api/auth/logout
///
/// Revokes the caller's session if one resolves and clears the cookie.
/// Always succeeds, even without a valid session.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let cookie_value = jar
        .get(&state.config.auth.cookie_name)
        .map(|c| c.value().to_string());

    if let Some(resolved) = state.resolver.resolve(cookie_value.as_deref()).await {
        state.store.revoke(&resolved.session.token).await?;

        state
            .audit
            .record(CreateAuditLogEntry {
                organization_id: resolved.organization.id,
                actor_id: Some(resolved.account.id),
                action: "logout".to_string(),
                entity_type: "session".to_string(),
                entity_id: Some(resolved.session.id),
                ip_address: client_ip(&headers),
                metadata: None,
            })
            .await;
    }

    let jar = jar.remove(removal_cookie(&state));

    Ok((
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    ))
}

/// GET /api/auth/session
///
/// Reports whether the caller holds a live session, and for whom.
pub async fn introspect(State(state): State<AppState>, jar: CookieJar) -> Response {
    let cookie_value = jar
        .get(&state.config.auth.cookie_name)
        .map(|c| c.value().to_string());

    match state.resolver.resolve(cookie_value.as_deref()).await {
        Some(resolved) => Json(IntrospectionResponse {
            authenticated: true,
            user: Some(SessionUserResponse::from(&resolved)),
        })
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(IntrospectionResponse {
                authenticated: false,
                user: None,
            }),
        )
            .into_response(),
    }
}

/// Build the session cookie for a freshly issued token.
fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(state.config.auth.cookie_name.clone(), token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(state.config.auth.cookie_secure);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(
        state.config.auth.session_lifetime_seconds(),
    ));
    cookie
}

/// Build the cookie used to clear the session on logout.
fn removal_cookie(state: &AppState) -> Cookie<'static> {
    let mut cookie = Cookie::new(state.config.auth.cookie_name.clone(), "");
    cookie.set_path("/");
    cookie
}

/// First address in `x-forwarded-for`, if present.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ip_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        assert_eq!(client_ip(&headers), Some("203.0.113.7".to_string()));
    }

    #[test]
    fn test_client_ip_missing() {
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }
}
