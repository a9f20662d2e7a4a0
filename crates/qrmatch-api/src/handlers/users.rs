//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};
use qrmatch_service::{UserResponse, UserService};

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<UserResponse> {
    let service = UserService::new(state.service_context());
    Json(service.current(&auth.caller))
}

/// Public profile behind a user's QR code; no token required
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.public_profile(path.user_id()?).await?;
    Ok(Json(response))
}
