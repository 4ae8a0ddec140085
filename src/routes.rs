//! Top-level router.
//!
//! # Route Structure
//!
//! - `GET /health`                   - Storage health check
//! - `GET /metrics`                  - Prometheus text exposition
//! - `ANY {prefix}/{resource}/{action}` - Dispatcher (`prefix` defaults to `/v1`)
//! - anything else                   - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - One span per request with latency
//! - **Headers** - Default response headers, see [`crate::api::middleware::headers`]
//! - **Path normalization** - Trailing slash handling

use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, metrics_handler, not_found_handler};
use crate::api::middleware::{ResponseHeaders, headers, tracing};
use crate::state::AppState;

/// Builds the router without path normalization.
///
/// `prefix` must start with `/` and must not end with one.
pub fn router(state: AppState, response_headers: ResponseHeaders, prefix: &str) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest(prefix, api::routes::dispatch_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            response_headers,
            headers::layer,
        ))
        .layer(tracing::layer())
}

/// [`router`] with trailing slashes trimmed before routing.
pub fn app_router(
    state: AppState,
    response_headers: ResponseHeaders,
    prefix: &str,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, response_headers, prefix))
}
