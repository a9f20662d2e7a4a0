//! Authentication extractor
//!
//! Resolves the bearer token from the Authorization header into a [`Caller`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use qrmatch_core::Snowflake;
use qrmatch_service::{AuthService, Caller};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user behind the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub caller: Caller,
}

impl AuthUser {
    #[inline]
    pub fn user_id(&self) -> Snowflake {
        self.caller.id()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::unauthenticated())?;

        let app_state = AppState::from_ref(state);

        let caller = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Bearer token rejected");
                ApiError::from(e)
            })?;

        Ok(AuthUser { caller })
    }
}
