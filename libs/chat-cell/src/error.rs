use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Attachment storage error: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Malformed chat document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Validation(msg) => AppError::Validation(msg),
            ChatError::Upload(e) => AppError::Internal(e.to_string()),
            ChatError::Malformed(e) => AppError::Internal(e.to_string()),
            ChatError::Store(e) => AppError::Database(e.to_string()),
        }
    }
}
