use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart, Path, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::models::{Attachment, ChatMessage, OutgoingMessage};
use crate::services::ChatService;

/// Accepts the multipart send form: `sender`, `receiver`, optional
/// `message` text and optional `file` attachment.
pub async fn send_message(
    State(state): State<Arc<AppConfig>>,
    Extension(_user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<Json<ChatMessage>, AppError> {
    let mut sender = String::new();
    let mut receiver = String::new();
    let mut message: Option<String> = None;
    let mut attachment: Option<Attachment> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("sender") => {
                sender = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            Some("receiver") => {
                receiver = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            Some("message") => {
                message = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("attachment").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                attachment = Some(Attachment {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let service = ChatService::new(&state);

    let stored = service
        .send(OutgoingMessage {
            sender,
            receiver,
            message,
            attachment,
        })
        .await?;

    Ok(Json(stored))
}

pub async fn list_messages(
    State(state): State<Arc<AppConfig>>,
    Extension(_user): Extension<AuthUser>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let service = ChatService::new(&state);

    let messages = service.list_all().await?;
    Ok(Json(messages))
}

pub async fn list_conversation(
    State(state): State<Arc<AppConfig>>,
    Extension(_user): Extension<AuthUser>,
    Path(participant_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let service = ChatService::new(&state);

    let messages = service.list_by_participant(&participant_id).await?;
    Ok(Json(messages))
}
