//! Application error type and its HTTP representation.
//!
//! Every error reaches the caller as a status code plus an [`Outcome`]
//! envelope `{"IsSuccess": false, "Message": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::response::{self, Outcome};

/// Errors surfaced by the dispatcher, use-cases and repositories.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or undecodable input.
    #[error("{message}")]
    BadRequest { message: String },

    /// No route or no record matches the request.
    #[error("{message}")]
    NotFound { message: String },

    /// Business-logic rejection, communicated as a structured descriptor.
    #[error("{message}")]
    Rejected { message: String },

    /// Any other failure (storage, entropy, poisoned locks).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Rejected { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Internal { message } => tracing::error!(%message, "request failed"),
            AppError::Rejected { message } => tracing::info!(%message, "use-case rejected input"),
            AppError::BadRequest { message } | AppError::NotFound { message } => {
                tracing::debug!(%status, %message, "request refused")
            }
        }

        response::json(status, &Outcome::failure(self.to_string()))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return match db.constraint() {
                Some("users_name_key") => AppError::rejected("duplicate name"),
                _ => AppError::rejected("duplicate entry"),
            };
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::not_found("record not found");
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("database error")
    }
}

impl From<ValidationErrors> for AppError {
    /// Flattens field errors into one deterministic message, e.g.
    /// `invalid age: must be between 0 and 150`.
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| {
                        errs.first()
                            .map(|e| e.code.to_string())
                            .unwrap_or_default()
                    });
                format!("invalid {field}: {detail}")
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::rejected(message)
    }
}
