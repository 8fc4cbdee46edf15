//! Session authentication configuration.

use serde::{Deserialize, Serialize};

/// Session issuance and cookie configuration.
///
/// The signing secret, cookie name, and lifetime are server-side values
/// and must never be exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing session tokens (HMAC-SHA256).
    #[serde(default = "default_session_secret")]
    pub session_secret: String,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Session lifetime in days. Both the stored session row and the signed
    /// token expiry are derived from this value and the same issuance
    /// timestamp, so the two can never drift.
    #[serde(default = "default_session_lifetime_days")]
    pub session_lifetime_days: u64,
    /// Whether the session cookie carries the `Secure` attribute.
    /// Enable in production (HTTPS) deployments.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Session lifetime expressed in seconds (cookie max-age).
    pub fn session_lifetime_seconds(&self) -> i64 {
        self.session_lifetime_days as i64 * 86400
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: default_session_secret(),
            cookie_name: default_cookie_name(),
            session_lifetime_days: default_session_lifetime_days(),
            cookie_secure: false,
        }
    }
}

fn default_session_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_cookie_name() -> String {
    "altevo_session".to_string()
}

fn default_session_lifetime_days() -> u64 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.cookie_name, "altevo_session");
        assert_eq!(config.session_lifetime_days, 7);
        assert_eq!(config.session_lifetime_seconds(), 604_800);
        assert!(!config.cookie_secure);
    }
}
