//! Application error types
//!
//! Unified error handling for the entire application.

use qrmatch_core::DomainError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated.")]
    Unauthenticated,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Self::Unauthenticated => 401,

            // 422 Unprocessable Entity
            Self::InvalidCredentials => 422,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => Self::domain_status_code(e),
        }
    }

    /// HTTP status code for a domain error
    #[must_use]
    pub fn domain_status_code(e: &DomainError) -> u16 {
        if e.is_rule_violation() {
            400
        } else if e.is_not_found() {
            404
        } else if e.is_validation() || e.is_conflict() {
            422
        } else {
            500
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Field-keyed messages attached to the error body, if any
    #[must_use]
    pub fn field_errors(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let (field, message) = match self {
            Self::InvalidCredentials => ("email", self.to_string()),
            Self::Domain(e) => (e.field()?, e.to_string()),
            _ => return None,
        };
        Some(BTreeMap::from([(field.to_string(), vec![message])]))
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        // Server-side detail stays in the logs
        let message = if err.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.to_string()
        };

        Self {
            message,
            code: err.error_code().to_string(),
            errors: err.field_errors(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
