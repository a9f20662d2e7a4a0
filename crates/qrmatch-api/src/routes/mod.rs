//! Route definitions
//!
//! The API is served at the root and again under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, matches, notifications, users};
use crate::state::AppState;

/// Create the main API router (health routes excluded so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(match_routes())
        .merge(notification_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(users::get_current_user))
        .route("/users/:user_id", get(users::get_user))
}

/// Match routes
fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/matches", get(matches::list))
        .route("/matches/scan", post(matches::scan))
        .route("/matches/:match_id", get(matches::get))
        .route("/matches/:match_id/accept", post(matches::accept))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list))
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
}
