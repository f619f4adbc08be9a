pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ChatError;
pub use models::{Attachment, ChatMessage, OutgoingMessage};
pub use services::ChatService;
