//! QR match API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p qrmatch-api
//! ```
//!
//! Configuration is read from environment variables, with `.env` support.

use qrmatch_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = qrmatch_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
