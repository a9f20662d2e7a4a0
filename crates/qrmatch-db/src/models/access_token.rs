//! Access token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for access_tokens table
#[derive(Debug, Clone, FromRow)]
pub struct AccessTokenModel {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}
