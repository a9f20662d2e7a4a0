//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    //
    // Messages never include the id: a missing row and a row owned by someone
    // else must be indistinguishable to the caller.
    // =========================================================================
    #[error("User not found")]
    UserNotFound(Snowflake),

    #[error("Match not found or not authorized")]
    MatchNotFound(Snowflake),

    #[error("Notification not found or not authorized")]
    NotificationNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("The selected scanned id is invalid.")]
    ScanTargetNotFound(Snowflake),

    #[error("The reason field must not be greater than {max} characters.")]
    ReasonTooLong { max: usize },

    #[error("You cannot scan yourself")]
    SelfMatch,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("The email has already been taken.")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MatchNotFound(_) => "UNKNOWN_MATCH",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            Self::ScanTargetNotFound(_) => "UNKNOWN_SCAN_TARGET",
            Self::ReasonTooLong { .. } => "REASON_TOO_LONG",
            Self::SelfMatch => "SELF_MATCH",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Request field the error is attached to, for field-keyed error bodies
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::ScanTargetNotFound(_) => Some("scanned_id"),
            Self::ReasonTooLong { .. } => Some("reason"),
            Self::EmailAlreadyExists => Some("email"),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::MatchNotFound(_) | Self::NotificationNotFound(_)
        )
    }

    /// Input rejected as unprocessable
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ScanTargetNotFound(_) | Self::ReasonTooLong { .. }
        )
    }

    /// Request is well-formed but breaks a business rule
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::SelfMatch)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
