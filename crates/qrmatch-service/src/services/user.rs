//! User service
//!
//! Handles user profile lookups.

use qrmatch_core::{DomainError, Snowflake};
use tracing::instrument;

use crate::dto::UserResponse;

use super::caller::Caller;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile of the authenticated caller
    pub fn current(&self, caller: &Caller) -> UserResponse {
        UserResponse::from(&caller.user)
    }

    /// Profile of any user, by id; the target of a QR code
    #[instrument(skip(self))]
    pub async fn public_profile(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(user.into())
    }
}
