//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qrmatch_core::entities::User;
use qrmatch_core::error::DomainError;
use qrmatch_core::traits::{RepoResult, UserRepository};
use qrmatch_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, firstname, lastname, email, phone, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, firstname, lastname, email, phone, created_at, updated_at
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, firstname, lastname, email, phone, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            ",
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, firstname, lastname, email, phone, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
