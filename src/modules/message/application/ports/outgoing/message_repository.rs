use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;

/// Fields the caller controls. `toAdmin` and `read` start at their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub listing_id: Uuid,
    pub from_user: Uuid,
    pub body: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Listing not found")]
    ListingNotFound,

    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Fails with `ListingNotFound` when the listing id does not exist.
    async fn create_message(&self, message: NewMessage) -> Result<Message, MessageRepositoryError>;

    /// Sets `read=true` and returns the updated row.
    async fn mark_read(&self, message_id: Uuid) -> Result<Message, MessageRepositoryError>;
}
