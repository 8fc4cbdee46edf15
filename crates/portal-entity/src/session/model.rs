//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single logged-in device or browser instance.
///
/// Created at login; mutated only to set `revoked_at` (logout or manual
/// revoke); never hard-deleted in the normal flow. Expired-but-unrevoked
/// rows are simply treated as dead at resolution time and left for
/// out-of-band housekeeping.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The account this session belongs to.
    pub account_id: Uuid,
    /// Opaque random token, unique, used as the database lookup key.
    pub token: String,
    /// When the session was issued (login time).
    pub issued_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was revoked, if it has been.
    pub revoked_at: Option<DateTime<Utc>>,
    /// Client IP address at login.
    pub ip_address: Option<String>,
    /// User-Agent header value at login.
    pub user_agent: Option<String>,
}

impl Session {
    /// A session is live iff it has not been revoked and its expiry is in
    /// the future. Evaluated by wall-clock comparison at resolution time;
    /// there is no background sweeper.
    pub fn is_live(&self) -> bool {
        self.revoked_at.is_none() && self.expires_at > Utc::now()
    }

    /// Check whether the session has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_in: Duration, revoked: bool) -> Session {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            token: Uuid::new_v4().to_string(),
            issued_at: now,
            expires_at: now + expires_in,
            revoked_at: revoked.then_some(now),
            ip_address: None,
            user_agent: None,
        }
    }

    #[test]
    fn test_live_after_creation() {
        assert!(session(Duration::days(7), false).is_live());
    }

    #[test]
    fn test_dead_after_revoke() {
        assert!(!session(Duration::days(7), true).is_live());
    }

    #[test]
    fn test_dead_after_expiry() {
        assert!(!session(Duration::seconds(-1), false).is_live());
    }

    #[test]
    fn test_dead_when_both_revoked_and_expired() {
        assert!(!session(Duration::seconds(-1), true).is_live());
    }
}
