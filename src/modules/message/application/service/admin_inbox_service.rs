use async_trait::async_trait;
use std::collections::HashMap;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::message::application::domain::entities::{InboxMessage, SenderSummary};
use crate::modules::message::application::ports::incoming::use_cases::{
    AdminInboxError, AdminInboxUseCase, InboxInput,
};
use crate::modules::message::application::ports::outgoing::MessageQuery;
use crate::shared::domain::PageResult;

pub struct AdminInboxService<Q, U>
where
    Q: MessageQuery,
    U: UserQuery,
{
    messages: Q,
    users: U,
}

impl<Q, U> AdminInboxService<Q, U>
where
    Q: MessageQuery,
    U: UserQuery,
{
    pub fn new(messages: Q, users: U) -> Self {
        Self { messages, users }
    }
}

#[async_trait]
impl<Q, U> AdminInboxUseCase for AdminInboxService<Q, U>
where
    Q: MessageQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        input: InboxInput,
    ) -> Result<PageResult<InboxMessage>, AdminInboxError> {
        let (filter, page) = input.validate()?;

        let result = self
            .messages
            .inbox(filter, page)
            .await
            .map_err(|e| AdminInboxError::QueryFailed(e.to_string()))?;

        let mut ids: Vec<_> = result.items.iter().map(|m| m.from_user).collect();
        ids.sort_unstable();
        ids.dedup();

        let senders: HashMap<_, SenderSummary> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.users
                .find_by_ids(&ids)
                .await
                .map_err(|e| AdminInboxError::QueryFailed(e.to_string()))?
                .into_iter()
                .map(|u| (u.id, SenderSummary::from(u)))
                .collect()
        };

        Ok(result.map(|message| {
            let sender = senders
                .get(&message.from_user)
                .cloned()
                .unwrap_or_else(|| SenderSummary::missing(message.from_user));
            InboxMessage::new(message, sender)
        }))
    }
}
