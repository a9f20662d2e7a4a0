//! Match database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for matches table
#[derive(Debug, Clone, FromRow)]
pub struct MatchModel {
    pub id: i64,
    pub scanner_id: i64,
    pub scanned_id: i64,
    pub reason: Option<String>,
    pub scanner_status: bool,
    pub scanned_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
