//! JSON response writing.
//!
//! All dispatcher output goes through [`json`], which serializes before
//! anything is written. If serialization fails the caller still gets a
//! status line and a body: a 500 with the encoder's error as plain text.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Outcome descriptor carrying a success flag and a human-readable message.
///
/// Used both as the failure envelope for every error and as the result of
/// actions that have no record to return (deletes).
///
/// ```json
/// { "IsSuccess": false, "Message": "duplicate name" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Outcome {
    pub is_success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
        }
    }
}

/// Serializes `value` and writes it with `status` and `application/json`.
///
/// On encoding failure, answers 500 with the raw error text instead.
pub fn json<T>(status: StatusCode, value: &T) -> Response
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(value) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => encoding_failure(e),
    }
}

fn encoding_failure(e: serde_json::Error) -> Response {
    tracing::error!(error = %e, "failed to encode response body");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        e.to_string(),
    )
        .into_response()
}
