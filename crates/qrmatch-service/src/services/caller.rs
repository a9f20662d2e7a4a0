//! Authenticated caller identity

use qrmatch_core::entities::User;
use qrmatch_core::Snowflake;

/// The user behind the current request, resolved once from its bearer token
/// and passed explicitly to every service call.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user: User,
    /// Hash of the presented token, so logout revokes exactly this session
    pub token_hash: String,
}

impl Caller {
    pub fn new(user: User, token_hash: String) -> Self {
        Self { user, token_hash }
    }

    #[inline]
    pub fn id(&self) -> Snowflake {
        self.user.id
    }
}
