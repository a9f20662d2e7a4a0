//! Notification entity - an event derived from a match action

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserMatch;
use crate::value_objects::Snowflake;

/// What happened, and therefore which participant the event is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Someone scanned you; addressed to the scanned party
    Proposal,
    /// Your scan was accepted; addressed to the scanner
    Acceptance,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proposal => "proposal",
            Self::Acceptance => "acceptance",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown notification type tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification type: {0}")]
pub struct ParseNotificationKindError(pub String);

impl FromStr for NotificationKind {
    type Err = ParseNotificationKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposal" => Ok(Self::Proposal),
            "acceptance" => Ok(Self::Acceptance),
            other => Err(ParseNotificationKindError(other.to_string())),
        }
    }
}

/// Event record about a match. It copies the participants rather than
/// referencing the match row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub kind: NotificationKind,
    pub scanner_id: Snowflake,
    pub scanned_id: Snowflake,
    /// Acceptance flag of the match at the time the event fired
    pub status: bool,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    fn for_match(id: Snowflake, kind: NotificationKind, m: &UserMatch, status: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind,
            scanner_id: m.scanner_id,
            scanned_id: m.scanned_id,
            status,
            read: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Event telling the scanned party they were scanned
    pub fn proposal(id: Snowflake, m: &UserMatch) -> Self {
        Self::for_match(id, NotificationKind::Proposal, m, false)
    }

    /// Event telling the scanner their proposal was accepted
    pub fn acceptance(id: Snowflake, m: &UserMatch) -> Self {
        Self::for_match(id, NotificationKind::Acceptance, m, true)
    }

    /// Whether `user_id` is either participant
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.scanner_id == user_id || self.scanned_id == user_id
    }

    /// Participant this event is meant for
    pub fn addressee(&self) -> Snowflake {
        match self.kind {
            NotificationKind::Proposal => self.scanned_id,
            NotificationKind::Acceptance => self.scanner_id,
        }
    }

    pub fn is_addressed_to(&self, user_id: Snowflake) -> bool {
        self.addressee() == user_id
    }

    /// Idempotent
    pub fn mark_read(&mut self) {
        if !self.read {
            self.read = true;
            self.updated_at = Utc::now();
        }
    }
}
