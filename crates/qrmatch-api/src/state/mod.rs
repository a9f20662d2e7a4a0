//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration, and database pool.

use std::sync::Arc;

use qrmatch_common::AppConfig;
use qrmatch_db::PgPool;
use qrmatch_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Pool behind the repositories, kept for readiness probes
    pool: PgPool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, pool: PgPool) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}
