use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::{ErrorCode, error_response};
use thiserror::Error;

use crate::models::UserId;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Storage failure passed through unchanged from the repository.
    #[error("{0}")]
    Repository(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound(id) => error_response(
                StatusCode::NOT_FOUND,
                format!("User {} not found", id),
                ErrorCode::NotFound,
            ),
            UserError::Repository(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Repository error: {}",
                    msg
                );
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    ErrorCode::InternalError,
                )
            }
        }
    }
}
