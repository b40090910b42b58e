//! Error types for the library catalog

use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes reported alongside every failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    BadValue = 18,
    NoSuchData = 20,
}

/// Reasons a borrow transaction can be rejected.
///
/// These are precondition failures caused by user input or catalog state,
/// never defects. They are returned to the caller as-is so the presentation
/// layer can decide how to show them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BorrowError {
    #[error("Borrower name must not be empty")]
    EmptyBorrowerName,

    #[error("Book with id {0} not found")]
    BookNotFound(i32),

    #[error("Book with id {0} is currently unavailable")]
    BookUnavailable(i32),
}

impl BorrowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BorrowError::EmptyBorrowerName => ErrorCode::BadValue,
            BorrowError::BookNotFound(_) => ErrorCode::NoSuchItem,
            BorrowError::BookUnavailable(_) => ErrorCode::ItemNotAvailable,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid seed data: {0}")]
    Seed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Borrow rejected: {0}")]
    Borrow(#[from] BorrowError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body handed to the presentation layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Config(_) => ErrorCode::Failure,
            AppError::Seed(_) => ErrorCode::NoSuchData,
            AppError::Io(_) | AppError::Json(_) => ErrorCode::NoSuchData,
            AppError::Borrow(e) => e.code(),
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// Build the error body, hiding internal details from the end user
    pub fn to_response(&self) -> ErrorResponse {
        let code = self.code();
        let message = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
