//! Middleware stack for the API server
//!
//! Provides request ID generation, tracing, timeouts, CORS, and rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use qrmatch_common::{CorsConfig, RateLimitConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests taking longer than this get 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the global rate limiter
///
/// Limits are global (not per-IP). A zero rate or burst leaves the router
/// unlimited.
pub fn apply_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    // Governor counts in replenish intervals, not requests per second
    let interval_ms = (1000 / u64::from(config.requests_per_second.max(1))).max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(interval_ms)
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish();

    match governor_conf {
        Some(conf) if config.requests_per_second > 0 => router.layer(GovernorLayer {
            config: Arc::new(conf),
        }),
        _ => {
            tracing::warn!("Rate limiting disabled: rate and burst must be non-zero");
            router
        }
    }
}

/// Apply request ID, tracing, timeout, and CORS layers
///
/// Layers wrap in reverse order, so requests see:
/// RequestID -> Trace -> Timeout -> CORS -> Handler
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    router
        // CORS (innermost - applied last to outgoing responses)
        .layer(create_cors_layer_from_config(cors_config, is_production))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation (outermost)
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Create CORS layer from configuration
fn create_cors_layer_from_config(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    // Development with nothing configured: any origin
    if !is_production && config.allowed_origins.is_empty() {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        return base_layer.allow_origin(Any);
    }

    if config.allowed_origins.is_empty() {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        return base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()));
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}
