//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cadence_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    BadGateway(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::BadGateway(detail) => ErrorResponse::bad_gateway(detail),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<cadence_core::error::DomainError> for AppError {
    fn from(err: cadence_core::error::DomainError) -> Self {
        match err {
            cadence_core::error::DomainError::NotFound(id) => {
                AppError::NotFound(format!("Post {} not found", id))
            }
            cadence_core::error::DomainError::Validation(e) => AppError::BadRequest(e.to_string()),
            cadence_core::error::DomainError::Persistence(e) => e.into(),
        }
    }
}

impl From<cadence_core::error::ValidationError> for AppError {
    fn from(err: cadence_core::error::ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<cadence_core::error::RepoError> for AppError {
    fn from(err: cadence_core::error::RepoError) -> Self {
        match err {
            cadence_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            cadence_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            cadence_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            cadence_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<cadence_core::error::GeneratorError> for AppError {
    fn from(err: cadence_core::error::GeneratorError) -> Self {
        tracing::error!("Content generation failed: {}", err);
        AppError::BadGateway(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
