use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::Message;
use crate::shared::domain::{PageRequest, PageResult};

/// Admin inbox filters. Both are optional narrowings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InboxFilter {
    pub listing_id: Option<Uuid>,
    pub unread_only: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// Every message the user sent, newest first.
    async fn list_by_sender(&self, sender: Uuid) -> Result<Vec<Message>, MessageQueryError>;

    /// Newest first, paged.
    async fn inbox(
        &self,
        filter: InboxFilter,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageQueryError>;
}
