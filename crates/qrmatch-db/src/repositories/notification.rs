//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use qrmatch_core::entities::{Notification, NotificationKind};
use qrmatch_core::traits::{NotificationRepository, RepoResult};
use qrmatch_core::value_objects::Snowflake;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert a notification row on any executor, so match writes can share their transaction
pub(super) async fn insert_notification<'e, E>(
    executor: E,
    notification: &Notification,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO notifications (id, "type", scanner_id, scanned_id, status, read, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(notification.id.into_inner())
    .bind(notification.kind.as_str())
    .bind(notification.scanner_id.into_inner())
    .bind(notification.scanned_id.into_inner())
    .bind(notification.status)
    .bind(notification.read)
    .bind(notification.created_at)
    .bind(notification.updated_at)
    .execute(executor)
    .await?;

    Ok(())
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_for_user(&self, user_id: Snowflake) -> RepoResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, "type", scanner_id, scanned_id, status, read, created_at, updated_at
            FROM notifications
            WHERE scanner_id = $1 OR scanned_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn mark_read(
        &self,
        id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Notification>> {
        // updated_at only moves on the first transition to read
        let row = sqlx::query_as::<_, NotificationModel>(
            r#"
            UPDATE notifications
            SET read = TRUE,
                updated_at = CASE WHEN read THEN updated_at ELSE NOW() END
            WHERE id = $1 AND (scanner_id = $2 OR scanned_id = $2)
            RETURNING id, "type", scanner_id, scanned_id, status, read, created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Notification::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn count_unread_addressed_to(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM notifications
            WHERE read = FALSE
              AND (("type" = $2 AND scanned_id = $1) OR ("type" = $3 AND scanner_id = $1))
            "#,
        )
        .bind(user_id.into_inner())
        .bind(NotificationKind::Proposal.as_str())
        .bind(NotificationKind::Acceptance.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
