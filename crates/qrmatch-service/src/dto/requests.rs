//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Absent fields deserialize to empty values so the rules below report them
//! per field instead of failing JSON extraction.

use qrmatch_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "The firstname field must be between 1 and 255 characters."))]
    pub firstname: String,

    #[validate(length(min = 1, max = 255, message = "The lastname field must be between 1 and 255 characters."))]
    pub lastname: String,

    #[validate(
        email(message = "The email field must be a valid email address."),
        length(max = 255, message = "The email field must not be greater than 255 characters.")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 20, message = "The phone field must be between 1 and 20 characters."))]
    pub phone: String,

    #[validate(length(min = 8, message = "The password field must be at least 8 characters."))]
    pub password: String,

    #[validate(must_match(other = "password", message = "The password field confirmation does not match."))]
    pub password_confirmation: String,
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "The email field must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

// ============================================================================
// Match Requests
// ============================================================================

/// Scan another user's QR code to propose a match
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScanRequest {
    /// Accepted as a JSON string or number
    #[validate(required(message = "The scanned id field is required."))]
    #[serde(default)]
    pub scanned_id: Option<Snowflake>,

    #[validate(length(max = 255, message = "The reason field must not be greater than 255 characters."))]
    #[serde(default)]
    pub reason: Option<String>,
}
