//! HS256 codec for the session cookie value.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use portal_core::config::AuthConfig;
use portal_core::error::AppError;
use portal_core::result::AppResult;

use super::claims::SessionClaims;

/// Why a presented token failed verification.
///
/// Callers that resolve cookies collapse all three variants into an
/// unauthenticated result; the distinction exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token is not a well-formed signed payload.
    #[error("malformed token")]
    Malformed,
    /// The signature does not match the configured secret.
    #[error("invalid token signature")]
    SignatureInvalid,
    /// The token's expiry is in the past.
    #[error("expired token")]
    Expired,
}

/// Encodes and decodes signed session tokens.
///
/// Keys are derived once from the configured secret; cloning the codec
/// is cheap enough to share across handlers.
#[derive(Clone)]
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokenCodec {
    /// Build a codec from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
        }
    }

    /// Sign claims into a compact token string.
    pub fn issue(&self, claims: &SessionClaims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(
                portal_core::error::ErrorKind::Internal,
                "Failed to sign session token",
                e,
            ))
    }

    /// Verify a token string and return its claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                _ => TokenError::Malformed,
            })
    }
}

impl std::fmt::Debug for SessionTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenCodec").finish_non_exhaustive()
    }
}
