//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Access token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of an issued bearer token, in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: i64,
}

impl AuthConfig {
    #[must_use]
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_seconds)
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "qrmatch".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_token_ttl() -> i64 {
    2_592_000 // 30 days
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_run_migrations() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let worker_id: u16 = parse_or(&lookup, "WORKER_ID", 0)?;
        if worker_id >= 1024 {
            return Err(ConfigError::InvalidValue("WORKER_ID", worker_id.to_string()));
        }

        let token_ttl_seconds = parse_or(&lookup, "TOKEN_TTL_SECONDS", default_token_ttl())?;
        if token_ttl_seconds <= 0 {
            return Err(ConfigError::InvalidValue(
                "TOKEN_TTL_SECONDS",
                token_ttl_seconds.to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: value("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_or(&lookup, "APP_ENV", default_env())?,
            },
            api: ServerConfig {
                host: value("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port())?,
            },
            database: DatabaseConfig {
                url: value("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections(),
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections(),
                )?,
            },
            auth: AuthConfig { token_ttl_seconds },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    &lookup,
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: parse_or(&lookup, "RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: value("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig { worker_id },
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", default_run_migrations())?,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset or blank
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        _ => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
