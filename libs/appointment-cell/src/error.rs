use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Appointment not found")]
    NotFound,

    #[error("Appointment is already completed")]
    AlreadyCompleted,

    #[error("Malformed appointment document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::Validation(msg) => AppError::Validation(msg),
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::AlreadyCompleted => AppError::Conflict(err.to_string()),
            AppointmentError::Malformed(e) => AppError::Internal(e.to_string()),
            AppointmentError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}
