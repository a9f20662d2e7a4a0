//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    /// Stored in the `type` column
    #[sqlx(rename = "type")]
    pub kind: String,
    pub scanner_id: i64,
    pub scanned_id: i64,
    pub status: bool,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
