use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    MarkReadError, MarkReadUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

pub struct MarkReadService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> MarkReadService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkReadUseCase for MarkReadService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, message_id: Uuid) -> Result<Message, MarkReadError> {
        self.repository
            .mark_read(message_id)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::NotFound => MarkReadError::NotFound,
                other => MarkReadError::RepositoryError(other.to_string()),
            })
    }
}
