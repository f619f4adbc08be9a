use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bill not found")]
    NotFound,

    #[error("No payment history found for this user")]
    NoPaymentHistory,

    #[error("Malformed bill document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::Validation(msg) => AppError::Validation(msg),
            BillingError::NotFound => AppError::NotFound(err.to_string()),
            BillingError::NoPaymentHistory => AppError::NotFound(err.to_string()),
            BillingError::Malformed(e) => AppError::Internal(e.to_string()),
            BillingError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}
