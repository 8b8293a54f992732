// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Only `NotFound` is ever surfaced to API callers. Store corruption is
/// recovered locally by substituting defaults, and content/publish failures
/// are absorbed inside the execution loops as stats events.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
