//! Error handling - maps handler failures onto JSON error bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::RepoError;
use quill_shared::ErrorResponse;

/// Application-level error type returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation errors: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(message) => ErrorResponse::not_found(message),
            AppError::BadRequest(detail) => {
                ErrorResponse::new("Invalid request body").with_detail(detail)
            }
            AppError::Validation(messages) => ErrorResponse::validation(messages.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::server_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(messages) => AppError::Validation(messages),
            err @ (RepoError::Connection(_) | RepoError::Query(_)) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
