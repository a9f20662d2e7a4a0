//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{AccessToken, Notification, User, UserMatch};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Batch lookup; missing IDs are skipped, order is unspecified
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a user with this ID exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Access Token Repository
// ============================================================================

#[async_trait]
pub trait AccessTokenRepository: Send + Sync {
    /// Persist a newly issued token
    async fn create(&self, token: &AccessToken) -> RepoResult<()>;

    /// Look a token up by the hash of its bearer string
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<AccessToken>>;

    /// Record that the token was just used
    async fn touch(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()>;

    /// Delete one token; returns whether a row was removed
    async fn delete_by_hash(&self, token_hash: &str) -> RepoResult<bool>;

    /// Drop a user's tokens that expired before `now`
    async fn delete_expired_for_user(&self, user_id: Snowflake, now: DateTime<Utc>)
        -> RepoResult<u64>;
}

// ============================================================================
// Match Repository
// ============================================================================

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Find match by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<UserMatch>>;

    /// Matches the user initiated, newest first
    async fn find_by_scanner(&self, user_id: Snowflake) -> RepoResult<Vec<UserMatch>>;

    /// Matches where the user was scanned, newest first
    async fn find_by_scanned(&self, user_id: Snowflake) -> RepoResult<Vec<UserMatch>>;

    /// Insert a match and its proposal notification atomically
    async fn create_with_notification(
        &self,
        user_match: &UserMatch,
        notification: &Notification,
    ) -> RepoResult<()>;

    /// Mark the match accepted if `recipient_id` is its scanned party and record
    /// an acceptance notification with `notification_id`, atomically.
    ///
    /// Returns `None` when no match with that ID has `recipient_id` as scanned party.
    async fn accept_with_notification(
        &self,
        match_id: Snowflake,
        recipient_id: Snowflake,
        notification_id: Snowflake,
    ) -> RepoResult<Option<(UserMatch, Notification)>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Notifications where the user is scanner or scanned, newest first
    async fn find_for_user(&self, user_id: Snowflake) -> RepoResult<Vec<Notification>>;

    /// Set `read` on a notification the user participates in.
    ///
    /// Returns `None` when the notification does not exist or does not involve the user.
    async fn mark_read(&self, id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Notification>>;

    /// Unread notifications addressed to the user
    async fn count_unread_addressed_to(&self, user_id: Snowflake) -> RepoResult<i64>;
}
