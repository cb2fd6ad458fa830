use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;

/// Raw send request. Both fields are checked in `validate`.
#[derive(Debug, Clone, Default)]
pub struct SendMessageInput {
    pub listing: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidMessage {
    pub listing_id: Uuid,
    pub body: String,
}

impl SendMessageInput {
    pub fn validate(self) -> Result<ValidMessage, SendMessageError> {
        let listing = self
            .listing
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SendMessageError::Validation("listing is required".into()))?;

        let listing_id = Uuid::parse_str(&listing)
            .map_err(|_| SendMessageError::Validation("listing must be a valid id".into()))?;

        let body = self
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| SendMessageError::Validation("message is required".into()))?;

        Ok(ValidMessage { listing_id, body })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SendMessageError {
    Validation(String),
    ListingNotFound,
    RepositoryError(String),
}

impl fmt::Display for SendMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendMessageError::Validation(msg) => write!(f, "{}", msg),
            SendMessageError::ListingNotFound => write!(f, "Listing not found"),
            SendMessageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        sender: Uuid,
        input: SendMessageInput,
    ) -> Result<Message, SendMessageError>;
}
