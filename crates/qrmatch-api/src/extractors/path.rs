//! Path parameter extractors
//!
//! Ids arrive as strings. A malformed id is reported exactly like an id that
//! does not exist, so the path never reveals more than a lookup would.

use qrmatch_core::{DomainError, Snowflake};
use serde::Deserialize;

use crate::response::ApiError;

fn parse_id(raw: &str, not_found: fn(Snowflake) -> DomainError) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(not_found(Snowflake::default())))
}

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.user_id, DomainError::UserNotFound)
    }
}

/// Path parameters with match_id
#[derive(Debug, Deserialize)]
pub struct MatchIdPath {
    pub match_id: String,
}

impl MatchIdPath {
    /// Parse match_id as Snowflake
    pub fn match_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.match_id, DomainError::MatchNotFound)
    }
}

/// Path parameters with notification_id
#[derive(Debug, Deserialize)]
pub struct NotificationIdPath {
    pub notification_id: String,
}

impl NotificationIdPath {
    /// Parse notification_id as Snowflake
    pub fn notification_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.notification_id, DomainError::NotificationNotFound)
    }
}
