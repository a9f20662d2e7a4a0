//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::collections::HashMap;
use std::sync::Arc;

use qrmatch_core::entities::User;
use qrmatch_core::traits::{
    AccessTokenRepository, MatchRepository, NotificationRepository, UserRepository,
};
use qrmatch_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Default bearer token lifetime
const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;

/// Service context containing all dependencies
///
/// The context only sees repository traits, so services run the same against
/// PostgreSQL or in-memory stores.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn AccessTokenRepository>,
    match_repo: Arc<dyn MatchRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    snowflake_generator: Arc<SnowflakeGenerator>,
    token_ttl: chrono::Duration,
}

impl ServiceContext {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_repo: Arc<dyn AccessTokenRepository>,
        match_repo: Arc<dyn MatchRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        token_ttl: chrono::Duration,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            match_repo,
            notification_repo,
            snowflake_generator,
            token_ttl,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn token_repo(&self) -> &dyn AccessTokenRepository {
        self.token_repo.as_ref()
    }

    pub fn match_repo(&self) -> &dyn MatchRepository {
        self.match_repo.as_ref()
    }

    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Settings ===

    /// Lifetime given to newly issued tokens
    pub fn token_ttl(&self) -> chrono::Duration {
        self.token_ttl
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    /// Batch-load users by id, keyed for joining onto matches and notifications
    pub async fn users_by_id(
        &self,
        ids: impl IntoIterator<Item = Snowflake>,
    ) -> ServiceResult<HashMap<Snowflake, User>> {
        let mut ids: Vec<Snowflake> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        let users = self.user_repo.find_by_ids(&ids).await?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    token_repo: Option<Arc<dyn AccessTokenRepository>>,
    match_repo: Option<Arc<dyn MatchRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    token_ttl: chrono::Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            token_repo: None,
            match_repo: None,
            notification_repo: None,
            snowflake_generator: None,
            token_ttl: chrono::Duration::days(DEFAULT_TOKEN_TTL_DAYS),
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn token_repo(mut self, repo: Arc<dyn AccessTokenRepository>) -> Self {
        self.token_repo = Some(repo);
        self
    }

    pub fn match_repo(mut self, repo: Arc<dyn MatchRepository>) -> Self {
        self.match_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn token_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.token_repo.ok_or_else(|| missing("token_repo"))?,
            self.match_repo.ok_or_else(|| missing("match_repo"))?,
            self.notification_repo.ok_or_else(|| missing("notification_repo"))?,
            self.snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::default())),
            self.token_ttl,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
