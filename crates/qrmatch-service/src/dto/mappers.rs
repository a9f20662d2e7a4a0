//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use qrmatch_core::entities::{MatchRole, Notification, User, UserMatch};

use super::responses::{
    MatchAsScanned, MatchAsScanner, MatchView, NotificationResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Match Mappers
// ============================================================================

impl From<&UserMatch> for MatchAsScanner {
    fn from(m: &UserMatch) -> Self {
        Self {
            id: m.id.to_string(),
            scanner_id: m.scanner_id.to_string(),
            scanned_id: m.scanned_id.to_string(),
            reason: m.reason.clone(),
            scanner_status: m.scanner_status,
            scanned_status: m.scanned_status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&UserMatch> for MatchAsScanned {
    fn from(m: &UserMatch) -> Self {
        Self {
            id: m.id.to_string(),
            scanner_id: m.scanner_id.to_string(),
            scanned_id: m.scanned_id.to_string(),
            scanner_status: m.scanner_status,
            scanned_status: m.scanned_status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl MatchView {
    /// Projection for a participant with the given role
    pub fn for_role(m: &UserMatch, role: MatchRole) -> Self {
        match role {
            MatchRole::Scanner => Self::Scanner(MatchAsScanner::from(m)),
            MatchRole::Scanned => Self::Scanned(MatchAsScanned::from(m)),
        }
    }
}

// ============================================================================
// Notification Mappers
// ============================================================================

impl From<&Notification> for NotificationResponse {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            kind: n.kind.as_str().to_string(),
            scanner_id: n.scanner_id.to_string(),
            scanned_id: n.scanned_id.to_string(),
            status: n.status,
            read: n.read,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}
