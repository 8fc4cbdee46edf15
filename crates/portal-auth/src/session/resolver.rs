//! Resolution of a session cookie into a tenant-scoped identity.

use std::sync::Arc;

use tracing::warn;

use portal_database::repositories::{AccountRepository, OrganizationRepository};
use portal_entity::account::ClientAccount;
use portal_entity::organization::Organization;
use portal_entity::session::Session;

use crate::session::store::SessionStore;
use crate::token::SessionTokenCodec;

/// Everything a request handler needs about an authenticated caller.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub session: Session,
    pub account: ClientAccount,
    pub organization: Organization,
}

/// Turns a raw cookie value into a [`ResolvedSession`], or nothing.
///
/// Resolution verifies the token signature, re-checks the session row
/// in the store, and reloads the account fresh. Signature validity is
/// never enough on its own: a revoked row kills the session before the
/// token's expiry, and a role change on the account applies on the very
/// next request.
#[derive(Debug, Clone)]
pub struct SessionResolver {
    codec: SessionTokenCodec,
    store: SessionStore,
    account_repo: Arc<AccountRepository>,
    organization_repo: Arc<OrganizationRepository>,
}

impl SessionResolver {
    /// Create a new session resolver.
    pub fn new(
        codec: SessionTokenCodec,
        store: SessionStore,
        account_repo: Arc<AccountRepository>,
        organization_repo: Arc<OrganizationRepository>,
    ) -> Self {
        Self {
            codec,
            store,
            account_repo,
            organization_repo,
        }
    }

    /// Resolve a cookie value into an authenticated context.
    ///
    /// Any failure along the chain yields `None`: missing cookie, bad
    /// signature, expired or revoked session, deactivated account, or a
    /// missing organization. Internal database errors are logged and
    /// also collapse to `None`; resolution never surfaces an error to
    /// the caller.
    pub async fn resolve(&self, cookie_value: Option<&str>) -> Option<ResolvedSession> {
        let token = cookie_value?;

        let claims = match self.codec.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, "Rejected session token");
                return None;
            }
        };

        let session = match self.store.find_by_token(&claims.sid).await {
            Ok(Some(session)) => session,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Session lookup failed during resolution");
                return None;
            }
        };

        if !session.is_live() {
            return None;
        }

        // Reload the account so deactivation and role changes take
        // effect immediately, not at token expiry.
        let account = match self.account_repo.find_by_id(session.account_id).await {
            Ok(Some(account)) if account.is_active => account,
            Ok(_) => return None,
            Err(e) => {
                warn!(error = %e, "Account lookup failed during resolution");
                return None;
            }
        };

        let organization = match self
            .organization_repo
            .find_by_id(account.organization_id)
            .await
        {
            Ok(Some(organization)) => organization,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Organization lookup failed during resolution");
                return None;
            }
        };

        Some(ResolvedSession {
            session,
            account,
            organization,
        })
    }
}
