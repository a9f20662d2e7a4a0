//! PostgreSQL implementation of AccessTokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use qrmatch_core::entities::AccessToken;
use qrmatch_core::traits::{AccessTokenRepository, RepoResult};
use qrmatch_core::value_objects::Snowflake;

use crate::models::AccessTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AccessTokenRepository
#[derive(Clone)]
pub struct PgAccessTokenRepository {
    pool: PgPool,
}

impl PgAccessTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessTokenRepository for PgAccessTokenRepository {
    #[instrument(skip(self, token), fields(token_id = %token.id, user_id = %token.user_id))]
    async fn create(&self, token: &AccessToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO access_tokens (id, user_id, token_hash, created_at, expires_at, last_used_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(token.id.into_inner())
        .bind(token.user_id.into_inner())
        .bind(&token.token_hash)
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.last_used_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<AccessToken>> {
        let result = sqlx::query_as::<_, AccessTokenModel>(
            r"
            SELECT id, user_id, token_hash, created_at, expires_at, last_used_at
            FROM access_tokens
            WHERE token_hash = $1
            ",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AccessToken::from))
    }

    #[instrument(skip(self))]
    async fn touch(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE access_tokens SET last_used_at = $2 WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn delete_by_hash(&self, token_hash: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM access_tokens WHERE token_hash = $1
            ",
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_expired_for_user(
        &self,
        user_id: Snowflake,
        now: DateTime<Utc>,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM access_tokens WHERE user_id = $1 AND expires_at <= $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
