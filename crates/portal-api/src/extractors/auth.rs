//! `AuthSession` extractor — resolves the session cookie into a tenant context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use portal_auth::ResolvedSession;
use portal_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated session context available in handlers.
///
/// Rejects with a 401 whenever the cookie is absent or does not resolve
/// to a live session on an active account.
#[derive(Debug, Clone)]
pub struct AuthSession(pub ResolvedSession);

impl std::ops::Deref for AuthSession {
    type Target = ResolvedSession;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie_value = jar
            .get(&state.config.auth.cookie_name)
            .map(|c| c.value().to_string());

        let resolved = state
            .resolver
            .resolve(cookie_value.as_deref())
            .await
            .ok_or_else(|| ApiError(AppError::authentication("Not authenticated")))?;

        Ok(AuthSession(resolved))
    }
}
