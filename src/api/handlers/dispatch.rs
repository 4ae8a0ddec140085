//! Axum entry point of the request dispatcher.

use axum::{
    extract::{Path, Request, State, rejection::PathRejection},
    http::Uri,
    response::{IntoResponse, Response},
};

use crate::dispatch::{Inbound, RouteKey};
use crate::error::AppError;
use crate::state::AppState;

/// Routes `<prefix>/{resource}/{action}` through the route table.
///
/// # Endpoint
///
/// `ANY /v1/{resource}/{action}` (the prefix is configurable)
///
/// # Response Codes
///
/// - **200 OK**: use-case succeeded, body is its result
/// - **400 Bad Request**: input could not be decoded, use-case not invoked
/// - **404 Not Found**: unknown resource/action or record
/// - **500 Internal Server Error**: use-case rejected the input or failed
pub async fn dispatch_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    request: Request,
) -> Response {
    // Segments that are not valid UTF-8 cannot name a resource or action.
    let Path((resource, action)) = match path {
        Ok(path) => path,
        Err(rejection) => {
            tracing::debug!(%rejection, "undecodable route segments");
            return AppError::not_found(format!("no route for {}", request.uri().path()))
                .into_response();
        }
    };

    let key = match RouteKey::parse(&resource, &action) {
        Ok(key) => key,
        Err(e) => {
            tracing::debug!(%resource, %action, "no such route");
            return e.into_response();
        }
    };

    let (parts, body) = request.into_parts();
    let inbound = Inbound {
        uri: parts.uri,
        body,
        body_limit: state.body_limit,
    };

    let response = match state.routes.dispatch(key, inbound).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    };

    let status = response.status();
    metrics::counter!(
        "dispatch_requests_total",
        "resource" => key.resource.as_str(),
        "action" => key.action.as_str(),
        "status" => status.as_str().to_owned()
    )
    .increment(1);
    tracing::debug!(route = %key, %status, "dispatched");

    response
}

/// Fallback for paths that do not have the `{resource}/{action}` shape.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()))
}
