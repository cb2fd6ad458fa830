use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    ListMyMessagesError, ListMyMessagesUseCase,
};
use crate::modules::message::application::ports::outgoing::MessageQuery;

pub struct ListMyMessagesService<Q>
where
    Q: MessageQuery,
{
    messages: Q,
}

impl<Q> ListMyMessagesService<Q>
where
    Q: MessageQuery,
{
    pub fn new(messages: Q) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl<Q> ListMyMessagesUseCase for ListMyMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self, sender: Uuid) -> Result<Vec<Message>, ListMyMessagesError> {
        self.messages
            .list_by_sender(sender)
            .await
            .map_err(|e| ListMyMessagesError::QueryFailed(e.to_string()))
    }
}
