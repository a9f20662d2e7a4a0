//! Match entity - a directional proposal from a scanner to the user they scanned

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Longest accepted `reason`, in characters
pub const REASON_MAX_LEN: usize = 255;

/// Which side of a match a user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRole {
    /// Initiated the match by scanning
    Scanner,
    /// Was scanned; the only party allowed to accept
    Scanned,
}

/// A match between two distinct users.
///
/// `scanner_status` is true from creation. `scanned_status` flips to true when
/// the scanned party accepts, and nothing ever sets it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMatch {
    pub id: Snowflake,
    pub scanner_id: Snowflake,
    pub scanned_id: Snowflake,
    pub reason: Option<String>,
    pub scanner_status: bool,
    pub scanned_status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserMatch {
    /// Create a fresh proposal
    ///
    /// # Errors
    /// `DomainError::SelfMatch` when both sides are the same user,
    /// `DomainError::ReasonTooLong` when the reason exceeds [`REASON_MAX_LEN`].
    pub fn propose(
        id: Snowflake,
        scanner_id: Snowflake,
        scanned_id: Snowflake,
        reason: Option<String>,
    ) -> Result<Self, DomainError> {
        if scanner_id == scanned_id {
            return Err(DomainError::SelfMatch);
        }

        // Blank reasons are stored as absent
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        if reason
            .as_deref()
            .is_some_and(|r| r.chars().count() > REASON_MAX_LEN)
        {
            return Err(DomainError::ReasonTooLong {
                max: REASON_MAX_LEN,
            });
        }

        let now = Utc::now();
        Ok(Self {
            id,
            scanner_id,
            scanned_id,
            reason,
            scanner_status: true,
            scanned_status: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Role of `user_id` on this match, `None` for outsiders
    pub fn role_of(&self, user_id: Snowflake) -> Option<MatchRole> {
        if user_id == self.scanner_id {
            Some(MatchRole::Scanner)
        } else if user_id == self.scanned_id {
            Some(MatchRole::Scanned)
        } else {
            None
        }
    }

    /// Record acceptance by the scanned party
    pub fn accept(&mut self) {
        self.scanned_status = true;
        self.updated_at = Utc::now();
    }
}
