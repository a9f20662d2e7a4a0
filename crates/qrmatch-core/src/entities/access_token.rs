//! Access token entity - one bearer session for a user

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Persisted session. Only the SHA-256 of the bearer string is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        token_hash: String,
        ttl: chrono::Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + ttl,
            last_used_at: None,
        }
    }

    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry() {
        let token = AccessToken::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "abc".to_string(),
            Duration::seconds(60),
        );
        assert!(!token.is_expired_at(token.created_at));
        assert!(!token.is_expired_at(token.created_at + Duration::seconds(59)));
        assert!(token.is_expired_at(token.created_at + Duration::seconds(60)));
    }
}
