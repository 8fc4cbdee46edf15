//! Signed session token issuance and verification.

pub mod claims;
pub mod codec;

pub use claims::SessionClaims;
pub use codec::{SessionTokenCodec, TokenError};
