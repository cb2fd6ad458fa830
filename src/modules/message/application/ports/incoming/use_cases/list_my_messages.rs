use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;

#[derive(Debug, Clone, PartialEq)]
pub enum ListMyMessagesError {
    QueryFailed(String),
}

impl fmt::Display for ListMyMessagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMyMessagesError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListMyMessagesUseCase: Send + Sync {
    async fn execute(&self, sender: Uuid) -> Result<Vec<Message>, ListMyMessagesError>;
}
