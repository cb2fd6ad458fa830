use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;

#[derive(Debug, Clone, PartialEq)]
pub enum MarkReadError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for MarkReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkReadError::NotFound => write!(f, "Message not found"),
            MarkReadError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Idempotent: marking an already read message returns it unchanged.
#[async_trait]
pub trait MarkReadUseCase: Send + Sync {
    async fn execute(&self, message_id: Uuid) -> Result<Message, MarkReadError>;
}
