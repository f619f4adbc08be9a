use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Doctor availability not found")]
    NotFound,

    #[error("Malformed availability document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::Validation(msg) => AppError::Validation(msg),
            AvailabilityError::NotFound => AppError::NotFound(err.to_string()),
            AvailabilityError::Malformed(e) => AppError::Internal(e.to_string()),
            AvailabilityError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}
