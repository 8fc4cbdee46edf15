//! Credential verification against stored account records.

use std::sync::Arc;

use portal_core::error::AppError;
use portal_core::result::AppResult;
use portal_database::repositories::AccountRepository;
use portal_entity::account::ClientAccount;

use crate::password::PasswordHasher;

/// Message returned for both unknown emails and wrong passwords, so a
/// caller cannot tell which addresses exist.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Verifies login credentials against the account store.
///
/// Verification never mutates account state; lockouts and throttling
/// are handled elsewhere.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    account_repo: Arc<AccountRepository>,
    hasher: PasswordHasher,
}

impl CredentialVerifier {
    /// Create a new credential verifier.
    pub fn new(account_repo: Arc<AccountRepository>) -> Self {
        Self {
            account_repo,
            hasher: PasswordHasher::new(),
        }
    }

    /// Verify an email/password pair and return the matching account.
    ///
    /// Email lookup is case-insensitive. Unknown emails and wrong
    /// passwords produce the same authentication error. A disabled
    /// account is an authorization error before the password is even
    /// checked; the account cannot log in regardless of credentials.
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<ClientAccount> {
        let email = email.trim().to_lowercase();

        let account = self
            .account_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;

        if !account.is_active {
            return Err(AppError::authorization("Account is disabled"));
        }

        if !self.hasher.verify(password, &account.password_hash)? {
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        Ok(account)
    }
}
