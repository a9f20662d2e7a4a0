//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use qrmatch_common::{AppConfig, AppError};
use qrmatch_core::SnowflakeGenerator;
use qrmatch_db::{
    create_pool, run_migrations, PgAccessTokenRepository, PgMatchRepository,
    PgNotificationRepository, PgPool, PgUserRepository,
};
use qrmatch_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    router.with_state(state)
}

/// Connect to PostgreSQL, migrate if configured, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&qrmatch_db::DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
    }

    build_app_state(pool, config)
}

/// Wire repositories over an existing pool into AppState
pub fn build_app_state(pool: PgPool, config: AppConfig) -> Result<AppState, AppError> {
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .token_repo(Arc::new(PgAccessTokenRepository::new(pool.clone())))
        .match_repo(Arc::new(PgMatchRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool.clone())))
        .snowflake_generator(snowflake_generator)
        .token_ttl(config.auth.token_ttl())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
