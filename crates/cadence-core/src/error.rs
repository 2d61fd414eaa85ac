//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures raised by the post service.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] RepoError),
}

/// Rejected input. Raised before any state changes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("A scheduled post needs both a date and a time")]
    MissingSchedule,

    #[error("Scheduled date must be in the future")]
    PastSchedule,

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("A comment keyword is required when comment engagement is on")]
    MissingCommentKeyword,

    #[error("Resource outline must be at least {min} characters")]
    OutlineTooShort { min: usize },

    #[error("Source data does not match the post's content type")]
    SourceDataMismatch,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Failures from the external content generation webhooks.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Webhook request failed: {0}")]
    Transport(String),

    #[error("Webhook returned HTTP {0}")]
    Status(u16),

    #[error("Webhook response could not be decoded: {0}")]
    Decode(String),
}
