//! Response types and error handling for API endpoints
//!
//! Every failure renders as `{ "message", "code", "errors"? }`.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qrmatch_common::{AppError, ErrorResponse};
use qrmatch_core::DomainError;
use qrmatch_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidJson(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => AppError::domain_status_code(e),
            Self::Validation(_) | Self::InvalidJson(_) => 422,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn unauthenticated() -> Self {
        Self::App(AppError::Unauthenticated)
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self::InvalidJson(msg.into())
    }

    fn into_body(self) -> ErrorResponse {
        match self {
            Self::App(e) => ErrorResponse::from(&e),
            Self::Service(e) => ErrorResponse::from(AppError::from(e)),
            Self::Domain(e) => ErrorResponse::from(AppError::from(e)),
            Self::Validation(errors) => validation_body(&errors),
            Self::InvalidJson(message) => ErrorResponse {
                message,
                code: "INVALID_JSON".to_string(),
                errors: None,
            },
            Self::Internal(_) => ErrorResponse {
                message: "Internal server error".to_string(),
                code: "INTERNAL_ERROR".to_string(),
                errors: None,
            },
        }
    }
}

/// Field-keyed messages; `message` repeats the first one
fn validation_body(errors: &ValidationErrors) -> ErrorResponse {
    let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(list) = kind {
            let messages = list.iter().map(|e| {
                e.message
                    .as_ref()
                    .map_or_else(|| format!("The {field} field is invalid."), ToString::to_string)
            });
            fields.entry(field.to_string()).or_default().extend(messages);
        }
    }

    let total: usize = fields.values().map(Vec::len).sum();
    let first = fields
        .values()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(|| "The given data was invalid.".to_string());

    let message = match total {
        0 | 1 => first,
        2 => format!("{first} (and 1 more error)"),
        n => format!("{first} (and {} more errors)", n - 1),
    };

    ErrorResponse {
        message,
        code: "VALIDATION_ERROR".to_string(),
        errors: Some(fields),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        (status, Json(self.into_body())).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
