//! Claims carried inside the signed session cookie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portal_entity::account::{AccountRole, ClientAccount};
use portal_entity::session::Session;

/// Claims embedded in a signed session token.
///
/// The signed payload is a hint, not an authority: every resolution
/// re-checks the session row and reloads the account, so revocation and
/// role changes take effect before the token expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Opaque session store key.
    pub sid: String,
    /// Client account ID.
    pub sub: Uuid,
    /// Organization (tenant) ID.
    pub org: Uuid,
    /// Role at issuance time.
    pub role: AccountRole,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch. Mirrors the session row's
    /// `expires_at`.
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a freshly created session.
    pub fn for_session(session: &Session, account: &ClientAccount) -> Self {
        Self {
            sid: session.token.clone(),
            sub: account.id,
            org: account.organization_id,
            role: account.role,
            iat: session.issued_at.timestamp(),
            exp: session.expires_at.timestamp(),
        }
    }

    /// Expiry as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_account() -> ClientAccount {
        ClientAccount {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: AccountRole::Admin,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_claims_mirror_session_and_account() {
        let account = sample_account();
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            account_id: account.id,
            token: Uuid::new_v4().to_string(),
            issued_at: now,
            expires_at: now + Duration::days(7),
            revoked_at: None,
            ip_address: None,
            user_agent: None,
        };

        let claims = SessionClaims::for_session(&session, &account);
        assert_eq!(claims.sid, session.token);
        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.org, account.organization_id);
        assert_eq!(claims.role, AccountRole::Admin);
        assert_eq!(claims.exp - claims.iat, 7 * 86_400);
    }
}
