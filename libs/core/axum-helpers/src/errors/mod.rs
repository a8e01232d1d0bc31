pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error body returned by every failing endpoint.
///
/// ```json
/// { "detail": "Protein not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Application error type that converts into an HTTP response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid query string: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::QueryRejection(e) => e.status(),
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (code, detail) = match self {
            AppError::QueryRejection(e) => {
                tracing::info!(error_code = ErrorCode::InvalidQuery.code(), "Query rejected: {}", e);
                (ErrorCode::InvalidQuery, e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (ErrorCode::ValidationError, validation_detail(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Bad request: {}", msg);
                (ErrorCode::ValidationError, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (ErrorCode::NotFound, msg)
            }
            AppError::Database(msg) => {
                tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {}", msg);
                (ErrorCode::DatabaseError, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (ErrorCode::InternalError, msg)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (ErrorCode::ServiceUnavailable, msg)
            }
        };

        let detail = if detail.trim().is_empty() {
            code.default_message().to_string()
        } else {
            detail
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Flatten field errors into one line, ordered by field name.
fn validation_detail(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{}: invalid value ({})", field, err.code),
            })
        })
        .collect();

    if parts.is_empty() {
        ErrorCode::ValidationError.default_message().to_string()
    } else {
        parts.join("; ")
    }
}
