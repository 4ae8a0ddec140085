//! Handler for the Prometheus scrape endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Renders every recorded metric in the Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response Codes
///
/// - **200 OK**: recorder installed, body is the exposition text
/// - **404 Not Found**: the state carries no recorder handle
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => AppError::not_found("metrics are not enabled").into_response(),
    }
}
