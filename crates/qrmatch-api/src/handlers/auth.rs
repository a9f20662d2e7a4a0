//! Authentication handlers
//!
//! Endpoints for registration, login, and logout.

use axum::{extract::State, Json};
use qrmatch_service::{
    AuthService, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Revoke the token used for this request
///
/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.logout(&auth.caller).await?;
    Ok(Json(response))
}
