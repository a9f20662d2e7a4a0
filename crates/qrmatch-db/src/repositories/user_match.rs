//! PostgreSQL implementation of MatchRepository
//!
//! Every write that produces a notification runs in one transaction with it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use qrmatch_core::entities::{Notification, UserMatch};
use qrmatch_core::traits::{MatchRepository, RepoResult};
use qrmatch_core::value_objects::Snowflake;

use crate::models::MatchModel;

use super::error::{map_db_error, map_match_insert_error};
use super::notification::insert_notification;

/// PostgreSQL implementation of MatchRepository
#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_where(&self, column: MatchColumn, user_id: Snowflake) -> RepoResult<Vec<UserMatch>> {
        let sql = format!(
            r"
            SELECT id, scanner_id, scanned_id, reason, scanner_status, scanned_status,
                   created_at, updated_at
            FROM matches
            WHERE {} = $1
            ORDER BY created_at DESC, id DESC
            ",
            column.as_str()
        );

        let rows = sqlx::query_as::<_, MatchModel>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserMatch::from).collect())
    }
}

#[derive(Debug, Clone, Copy)]
enum MatchColumn {
    Scanner,
    Scanned,
}

impl MatchColumn {
    fn as_str(self) -> &'static str {
        match self {
            Self::Scanner => "scanner_id",
            Self::Scanned => "scanned_id",
        }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<UserMatch>> {
        let result = sqlx::query_as::<_, MatchModel>(
            r"
            SELECT id, scanner_id, scanned_id, reason, scanner_status, scanned_status,
                   created_at, updated_at
            FROM matches
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserMatch::from))
    }

    #[instrument(skip(self))]
    async fn find_by_scanner(&self, user_id: Snowflake) -> RepoResult<Vec<UserMatch>> {
        self.find_where(MatchColumn::Scanner, user_id).await
    }

    #[instrument(skip(self))]
    async fn find_by_scanned(&self, user_id: Snowflake) -> RepoResult<Vec<UserMatch>> {
        self.find_where(MatchColumn::Scanned, user_id).await
    }

    #[instrument(skip_all, fields(match_id = %user_match.id, notification_id = %notification.id))]
    async fn create_with_notification(
        &self,
        user_match: &UserMatch,
        notification: &Notification,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO matches (id, scanner_id, scanned_id, reason, scanner_status, scanned_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user_match.id.into_inner())
        .bind(user_match.scanner_id.into_inner())
        .bind(user_match.scanned_id.into_inner())
        .bind(&user_match.reason)
        .bind(user_match.scanner_status)
        .bind(user_match.scanned_status)
        .bind(user_match.created_at)
        .bind(user_match.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_match_insert_error)?;

        insert_notification(&mut *tx, notification)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn accept_with_notification(
        &self,
        match_id: Snowflake,
        recipient_id: Snowflake,
        notification_id: Snowflake,
    ) -> RepoResult<Option<(UserMatch, Notification)>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Ownership check and write in one statement
        let updated = sqlx::query_as::<_, MatchModel>(
            r"
            UPDATE matches
            SET scanned_status = TRUE, updated_at = NOW()
            WHERE id = $1 AND scanned_id = $2
            RETURNING id, scanner_id, scanned_id, reason, scanner_status, scanned_status,
                      created_at, updated_at
            ",
        )
        .bind(match_id.into_inner())
        .bind(recipient_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = updated else {
            debug!("No match owned by recipient, rolling back");
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(None);
        };

        let user_match = UserMatch::from(model);
        let notification = Notification::acceptance(notification_id, &user_match);

        insert_notification(&mut *tx, &notification)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Some((user_match, notification)))
    }
}
