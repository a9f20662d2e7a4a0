//! # qrmatch-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{generate_token, hash_password, hash_token, verify_dummy_password, verify_password, IssuedToken};
pub use config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig, SnowflakeConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
