//! Application-wide result alias.

use crate::error::AppError;

/// Result type used throughout the portal crates.
pub type AppResult<T> = Result<T, AppError>;
