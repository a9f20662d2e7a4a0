//! Match handlers
//!
//! Endpoints for scanning, accepting, and viewing matches.

use axum::{
    extract::{Path, State},
    Json,
};
use qrmatch_service::{
    MatchAsScanned, MatchAsScanner, MatchDetailResponse, MatchListResponse, MatchService,
    ScanRequest,
};

use crate::extractors::{AuthUser, MatchIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Propose a match by scanning another user's code
///
/// POST /matches/scan
pub async fn scan(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ScanRequest>,
) -> ApiResult<Created<Json<MatchAsScanner>>> {
    let service = MatchService::new(state.service_context());
    let response = service.propose(&auth.caller, request).await?;
    Ok(Created(Json(response)))
}

/// Accept a match addressed to the caller
///
/// POST /matches/{match_id}/accept
pub async fn accept(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<MatchIdPath>,
) -> ApiResult<Json<MatchAsScanned>> {
    let service = MatchService::new(state.service_context());
    let response = service.accept(&auth.caller, path.match_id()?).await?;
    Ok(Json(response))
}

/// List the caller's matches
///
/// GET /matches
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MatchListResponse>> {
    let service = MatchService::new(state.service_context());
    let response = service.list(&auth.caller).await?;
    Ok(Json(response))
}

/// Get a match the caller takes part in
///
/// GET /matches/{match_id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<MatchIdPath>,
) -> ApiResult<Json<MatchDetailResponse>> {
    let service = MatchService::new(state.service_context());
    let response = service.get(&auth.caller, path.match_id()?).await?;
    Ok(Json(response))
}
