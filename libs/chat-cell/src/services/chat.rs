use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::store::StoreClient;

use crate::error::ChatError;
use crate::models::{Attachment, ChatMessage, OutgoingMessage};

const COLLECTION: &str = "chat_messages";

pub struct ChatService {
    store: StoreClient,
    uploads_dir: PathBuf,
}

impl ChatService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
            uploads_dir: PathBuf::from(&config.uploads_dir),
        }
    }

    /// Persist a message. At least one of text and attachment is required;
    /// the attachment is written to the uploads directory before the
    /// document insert, and the message carries its stored path.
    pub async fn send(&self, outgoing: OutgoingMessage) -> Result<ChatMessage, ChatError> {
        debug!(
            "Sending message from {} to {}",
            outgoing.sender, outgoing.receiver
        );

        for (field, value) in [
            ("sender", &outgoing.sender),
            ("receiver", &outgoing.receiver),
        ] {
            if value.trim().is_empty() {
                return Err(ChatError::Validation(format!("{} is required", field)));
            }
        }

        let has_text = outgoing
            .message
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty());
        if !has_text && outgoing.attachment.is_none() {
            return Err(ChatError::Validation(
                "Message or file is required".to_string(),
            ));
        }

        let file = match &outgoing.attachment {
            Some(attachment) => Some(self.store_attachment(attachment)?),
            None => None,
        };

        let document = json!({
            "sender": outgoing.sender,
            "receiver": outgoing.receiver,
            "message": outgoing.message,
            "file": file,
            "timestamp": Utc::now().to_rfc3339()
        });

        let stored = self.store.insert(COLLECTION, document).await?;

        let message: ChatMessage = serde_json::from_value(stored)?;
        debug!("Message stored with ID: {}", message.id);

        Ok(message)
    }

    /// All messages in storage order.
    pub async fn list_all(&self) -> Result<Vec<ChatMessage>, ChatError> {
        let result = self.store.find(COLLECTION, "").await?;

        let messages = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ChatMessage>, _>>()?;

        Ok(messages)
    }

    /// Every message where the participant appears as sender or receiver,
    /// in storage order.
    pub async fn list_by_participant(
        &self,
        participant_id: &str,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        let query = format!(
            "or=(sender.eq.{},receiver.eq.{})",
            participant_id, participant_id
        );
        let result = self.store.find(COLLECTION, &query).await?;

        let messages = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ChatMessage>, _>>()?;

        Ok(messages)
    }

    /// Write the attachment bytes under the uploads directory and return
    /// the path the static mount serves it from. The upload name is never
    /// trusted beyond its extension.
    fn store_attachment(&self, attachment: &Attachment) -> Result<String, ChatError> {
        fs::create_dir_all(&self.uploads_dir)?;

        let stored_name = match Path::new(&attachment.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let path = self.uploads_dir.join(&stored_name);
        fs::write(&path, &attachment.bytes)?;

        debug!("Stored attachment at {}", path.display());
        Ok(format!("/uploads/{}", stored_name))
    }
}
