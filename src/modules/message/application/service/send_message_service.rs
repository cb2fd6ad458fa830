use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    SendMessageError, SendMessageInput, SendMessageUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};

pub struct SendMessageService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> SendMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SendMessageUseCase for SendMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        sender: Uuid,
        input: SendMessageInput,
    ) -> Result<Message, SendMessageError> {
        let valid = input.validate()?;

        let message = self
            .repository
            .create_message(NewMessage {
                listing_id: valid.listing_id,
                from_user: sender,
                body: valid.body,
            })
            .await
            .map_err(|e| match e {
                MessageRepositoryError::ListingNotFound => SendMessageError::ListingNotFound,
                other => SendMessageError::RepositoryError(other.to_string()),
            })?;

        info!(message_id = %message.id, listing_id = %message.listing_id, "Message sent");
        Ok(message)
    }
}
