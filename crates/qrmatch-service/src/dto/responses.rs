//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Bare `{ "message": ... }` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// User / Auth Responses
// ============================================================================

/// Public user projection; never carries the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

impl RegisterResponse {
    pub fn success(user: UserResponse) -> Self {
        Self {
            message: "success".to_string(),
            user,
        }
    }
}

/// Login result; the token is shown exactly once
#[derive(Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

impl LoginResponse {
    pub fn success(token: String) -> Self {
        Self {
            message: "success".to_string(),
            token,
        }
    }
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Match Responses
// ============================================================================

/// Match as seen by its scanner, `reason` included
#[derive(Debug, Clone, Serialize)]
pub struct MatchAsScanner {
    pub id: String,
    pub scanner_id: String,
    pub scanned_id: String,
    pub reason: Option<String>,
    pub scanner_status: bool,
    pub scanned_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match as seen by the scanned party; there is no `reason` field at all
#[derive(Debug, Clone, Serialize)]
pub struct MatchAsScanned {
    pub id: String,
    pub scanner_id: String,
    pub scanned_id: String,
    pub scanner_status: bool,
    pub scanned_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection picked by the caller's role in the match
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MatchView {
    Scanner(MatchAsScanner),
    Scanned(MatchAsScanned),
}

/// Entry of `scans`: a match the caller initiated
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    #[serde(flatten)]
    pub user_match: MatchAsScanner,
    pub scanned: UserResponse,
}

/// Entry of `scanned_by`: a match someone else initiated
#[derive(Debug, Clone, Serialize)]
pub struct ScannedByEntry {
    #[serde(flatten)]
    pub user_match: MatchAsScanned,
    pub scanner: UserResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchListResponse {
    pub scans: Vec<ScanEntry>,
    pub scanned_by: Vec<ScannedByEntry>,
}

/// Single match with both participants attached
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetailResponse {
    #[serde(flatten)]
    pub user_match: MatchView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned: Option<UserResponse>,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub scanner_id: String,
    pub scanned_id: String,
    pub status: bool,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationWithUsers {
    #[serde(flatten)]
    pub notification: NotificationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned: Option<UserResponse>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
