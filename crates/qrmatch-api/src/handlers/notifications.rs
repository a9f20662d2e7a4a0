//! Notification handlers

use axum::{
    extract::{Path, State},
    Json,
};
use qrmatch_service::{
    NotificationResponse, NotificationService, NotificationWithUsers, UnreadCountResponse,
};

use crate::extractors::{AuthUser, NotificationIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<NotificationWithUsers>>> {
    let service = NotificationService::new(state.service_context());
    let response = service.list(&auth.caller).await?;
    Ok(Json(response))
}

/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.unread_count(&auth.caller).await?;
    Ok(Json(response))
}

/// POST /notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<NotificationIdPath>,
) -> ApiResult<Json<NotificationResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service
        .mark_read(&auth.caller, path.notification_id()?)
        .await?;
    Ok(Json(response))
}
