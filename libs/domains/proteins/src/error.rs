use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const PROTEIN_NOT_FOUND: &str = "Protein not found";
pub const PROTEINS_NOT_FOUND: &str = "Proteins not found";

#[derive(Debug, Error)]
pub enum ProteinError {
    /// Lookup or listing produced nothing. Carries the client-facing message.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any failure talking to or decoding from the store
    #[error("{0}")]
    Store(String),
}

pub type ProteinResult<T> = Result<T, ProteinError>;

impl ProteinError {
    pub fn protein_not_found() -> Self {
        ProteinError::NotFound(PROTEIN_NOT_FOUND)
    }

    pub fn proteins_not_found() -> Self {
        ProteinError::NotFound(PROTEINS_NOT_FOUND)
    }
}

impl From<ProteinError> for AppError {
    fn from(err: ProteinError) -> Self {
        match err {
            ProteinError::NotFound(msg) => AppError::NotFound(msg.to_string()),
            ProteinError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ProteinError::Store(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProteinError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProteinError {
    fn from(err: mongodb::error::Error) -> Self {
        ProteinError::Store(err.to_string())
    }
}
