//! Notification service

use qrmatch_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{NotificationResponse, NotificationWithUsers, UnreadCountResponse, UserResponse};

use super::caller::Caller;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every notification the caller takes part in, newest first
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn list(&self, caller: &Caller) -> ServiceResult<Vec<NotificationWithUsers>> {
        let notifications = self
            .ctx
            .notification_repo()
            .find_for_user(caller.id())
            .await?;

        let users = self
            .ctx
            .users_by_id(
                notifications
                    .iter()
                    .flat_map(|n| [n.scanner_id, n.scanned_id]),
            )
            .await?;

        Ok(notifications
            .iter()
            .map(|n| NotificationWithUsers {
                notification: NotificationResponse::from(n),
                scanner: users.get(&n.scanner_id).map(UserResponse::from),
                scanned: users.get(&n.scanned_id).map(UserResponse::from),
            })
            .collect())
    }

    /// Mark a notification as read. Calling it again is a no-op.
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn mark_read(
        &self,
        caller: &Caller,
        notification_id: Snowflake,
    ) -> ServiceResult<NotificationResponse> {
        let notification = self
            .ctx
            .notification_repo()
            .mark_read(notification_id, caller.id())
            .await?
            .ok_or(DomainError::NotificationNotFound(notification_id))?;

        info!(notification_id = %notification.id, "Notification marked read");

        Ok(NotificationResponse::from(&notification))
    }

    /// Unread notifications meant for the caller
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn unread_count(&self, caller: &Caller) -> ServiceResult<UnreadCountResponse> {
        let unread = self
            .ctx
            .notification_repo()
            .count_unread_addressed_to(caller.id())
            .await?;

        Ok(UnreadCountResponse { unread })
    }
}
