//! Generic input mapping.
//!
//! Decoding is purely mechanical: bytes in, structure out, no business
//! validation. Failures are always returned so the dispatcher can answer
//! `400` instead of running a use-case on a zero-valued input.

use axum::{body::Body, extract::Query, http::Uri};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Reads `body` fully and decodes it as JSON into `T`.
///
/// The body is consumed by this call and dropped exactly once, whatever
/// the decode outcome.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if the body exceeds `limit` bytes,
/// cannot be read, or is not valid JSON for `T`.
pub async fn read_json<T>(body: Body, limit: usize) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let bytes = axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::debug!(error = %e, limit, "failed to read request body");
        AppError::bad_request("request body is unreadable or too large")
    })?;

    decode_json(&bytes)
}

/// Decodes already-buffered JSON bytes into `T`.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] describing the decode failure.
pub fn decode_json<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode JSON body");
        AppError::bad_request(format!("invalid JSON body: {e}"))
    })
}

/// Decodes the query string of `uri` into `T`.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if required parameters are missing or
/// malformed.
pub fn read_query<T>(uri: &Uri) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    Query::<T>::try_from_uri(uri)
        .map(|Query(value)| value)
        .map_err(|e| {
            tracing::debug!(error = %e, "failed to decode query string");
            AppError::bad_request(format!("invalid query string: {}", e.body_text()))
        })
}
