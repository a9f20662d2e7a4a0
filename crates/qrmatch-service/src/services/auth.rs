//! Authentication service
//!
//! Handles registration, login, bearer token resolution, and logout.

use chrono::Utc;
use qrmatch_common::auth::{
    hash_password, hash_token, verify_dummy_password, verify_password, IssuedToken,
};
use qrmatch_core::entities::{AccessToken, User};
use qrmatch_core::DomainError;
use tracing::{debug, info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse};

use super::caller::Caller;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password = request.password;
        let password_hash = run_blocking(move || hash_password(&password)).await??;

        let user = User::new(
            self.ctx.generate_id(),
            request.firstname,
            request.lastname,
            request.email,
            request.phone,
        );

        // A concurrent registration can still win the race; the unique index
        // reports it as EmailAlreadyExists
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(RegisterResponse::success(user.into()))
    }

    /// Login with email and password, issuing a fresh bearer token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let LoginRequest { email, password } = request;

        let Some(user) = self.ctx.user_repo().find_by_email(&email).await? else {
            run_blocking(move || verify_dummy_password(&password)).await?;
            warn!("Login failed: unknown email");
            return Err(ServiceError::invalid_credentials());
        };

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::invalid_credentials()
            })?;

        if !run_blocking(move || verify_password(&password, &password_hash)).await?? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::invalid_credentials());
        }

        let now = Utc::now();
        let purged = self
            .ctx
            .token_repo()
            .delete_expired_for_user(user.id, now)
            .await?;
        if purged > 0 {
            debug!(user_id = %user.id, purged, "Purged expired tokens");
        }

        let issued = IssuedToken::generate();
        let token = AccessToken::new(
            self.ctx.generate_id(),
            user.id,
            issued.hash,
            self.ctx.token_ttl(),
        );
        self.ctx.token_repo().create(&token).await?;

        info!(user_id = %user.id, token_id = %token.id, "User logged in successfully");

        Ok(LoginResponse::success(issued.plaintext))
    }

    /// Resolve a bearer token to the user it belongs to
    ///
    /// # Errors
    /// `Unauthenticated` when the token is unknown, expired, or its user is gone
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Caller> {
        let token_hash = hash_token(token);
        let now = Utc::now();

        let stored = self
            .ctx
            .token_repo()
            .find_by_hash(&token_hash)
            .await?
            .ok_or_else(ServiceError::unauthenticated)?;

        if stored.is_expired_at(now) {
            debug!(token_id = %stored.id, "Rejected expired token");
            return Err(ServiceError::unauthenticated());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(stored.user_id)
            .await?
            .ok_or_else(ServiceError::unauthenticated)?;

        self.ctx.token_repo().touch(stored.id, now).await?;

        Ok(Caller::new(user, token_hash))
    }

    /// Revoke the token the caller authenticated with; other sessions survive
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn logout(&self, caller: &Caller) -> ServiceResult<MessageResponse> {
        let revoked = self
            .ctx
            .token_repo()
            .delete_by_hash(&caller.token_hash)
            .await?;

        if revoked {
            info!("User logged out");
        }

        Ok(MessageResponse::new("Logged out successfully"))
    }
}

/// Run Argon2 work on the blocking pool
async fn run_blocking<T, F>(task: F) -> ServiceResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ServiceError::internal(format!("Password task failed: {e}")))
}
