use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    NotFound,

    #[error("Password hashing error: {0}")]
    Hash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Malformed user document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(msg) => AppError::Validation(msg),
            // Duplicate registration identity sits in the auth taxonomy,
            // alongside bad credentials
            AccountError::DuplicateUsername => AppError::Auth(err.to_string()),
            AccountError::DuplicateEmail => AppError::Auth(err.to_string()),
            AccountError::InvalidCredentials => AppError::Auth(err.to_string()),
            AccountError::NotFound => AppError::NotFound(err.to_string()),
            AccountError::Hash(msg) => AppError::Internal(msg),
            AccountError::Token(msg) => AppError::Internal(msg),
            AccountError::Malformed(e) => AppError::Internal(e.to_string()),
            AccountError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}
