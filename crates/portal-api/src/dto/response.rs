//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portal_auth::ResolvedSession;
use portal_entity::account::ClientAccount;
use portal_entity::organization::Organization;
use portal_entity::session::Session;
use portal_entity::ticket::{RequestTicket, TicketEvent};

/// User summary returned from login and session introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUserResponse {
    /// Account ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role (`admin` or `user`).
    pub role: String,
    /// Organization ID.
    pub organization_id: Uuid,
    /// Organization display name.
    pub organization_name: String,
}

impl SessionUserResponse {
    /// Build from an account and its organization.
    pub fn from_account(account: &ClientAccount, organization: &Organization) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role.to_string(),
            organization_id: organization.id,
            organization_name: organization.name.clone(),
        }
    }
}

impl From<&ResolvedSession> for SessionUserResponse {
    fn from(resolved: &ResolvedSession) -> Self {
        Self::from_account(&resolved.account, &resolved.organization)
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether login succeeded.
    pub success: bool,
    /// The authenticated user.
    pub user: SessionUserResponse,
}

/// Session introspection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    /// Whether the caller holds a live session.
    pub authenticated: bool,
    /// The authenticated user, when `authenticated` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUserResponse>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// A session as shown on the security page. The opaque token never
/// leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryResponse {
    /// Session ID.
    pub id: Uuid,
    /// When the session was issued.
    pub issued_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was revoked, if it was.
    pub revoked_at: Option<DateTime<Utc>>,
    /// IP address recorded at login.
    pub ip_address: Option<String>,
    /// User agent recorded at login.
    pub user_agent: Option<String>,
    /// Whether the session is still live.
    pub live: bool,
    /// Whether this is the session making the request.
    pub current: bool,
}

impl SessionSummaryResponse {
    /// Build a summary, marking the caller's own session.
    pub fn from_session(session: &Session, current_session_id: Uuid) -> Self {
        Self {
            id: session.id,
            issued_at: session.issued_at,
            expires_at: session.expires_at,
            revoked_at: session.revoked_at,
            ip_address: session.ip_address.clone(),
            user_agent: session.user_agent.clone(),
            live: session.is_live(),
            current: session.id == current_session_id,
        }
    }
}

/// A ticket together with its timeline events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDetailResponse {
    /// The ticket.
    #[serde(flatten)]
    pub ticket: RequestTicket,
    /// Timeline events, oldest first.
    pub events: Vec<TicketEvent>,
}
