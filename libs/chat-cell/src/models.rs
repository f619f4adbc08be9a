use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message between two participants. Messages are append-only: never
/// updated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: String,
    pub receiver: String,
    pub message: Option<String>,
    /// Stored-path reference under the static uploads mount.
    pub file: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A message on its way in, assembled from the multipart form.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    pub sender: String,
    pub receiver: String,
    pub message: Option<String>,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
