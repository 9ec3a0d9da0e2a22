//! Error handling - maps domain errors to `{message}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use pulse_shared::MessageResponse;
use std::fmt;

use pulse_core::error::{DomainError, StoreError};

/// Application-level error type that converts to `{message}` responses.
///
/// Conflicts answer 400 rather than 409: repeat volunteer/donate/like
/// actions are part of the 400 contract the clients rely on.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Forbidden(String),
    Unauthorized,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Forbidden(msg) => msg.clone(),
            AppError::Unauthorized => "Please login first".to_string(),
            AppError::Internal(detail) => {
                // Log internals server-side; the caller gets a generic line.
                tracing::error!("Internal error: {}", detail);
                "Something went wrong".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::Storage(e) => AppError::from(e),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connection(msg) => {
                tracing::error!("Store connection error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
            StoreError::Query(msg) => {
                tracing::error!("Store query error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
        }
    }
}

impl From<pulse_core::ports::AuthError> for AppError {
    fn from(err: pulse_core::ports::AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
