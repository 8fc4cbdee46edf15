//! Request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create-ticket request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTicketRequest {
    /// Ticket subject line.
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,
    /// Ticket description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Optional priority (`low`, `medium`, `high`, `urgent`); defaults to medium.
    pub priority: Option<String>,
}

/// Post-message request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostMessageRequest {
    /// Message body.
    #[validate(length(min = 1, max = 10_000, message = "Body must be 1-10000 characters"))]
    pub body: String,
}
