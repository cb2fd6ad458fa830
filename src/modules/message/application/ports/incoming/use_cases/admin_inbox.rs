use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::message::application::domain::entities::InboxMessage;
use crate::modules::message::application::ports::outgoing::InboxFilter;
use crate::shared::domain::{PageRequest, PageResult};

#[derive(Debug, Clone, Default)]
pub struct InboxInput {
    pub listing: Option<String>,
    pub unread: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl InboxInput {
    pub fn validate(self) -> Result<(InboxFilter, PageRequest), AdminInboxError> {
        let listing_id = self
            .listing
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| Uuid::parse_str(&s))
            .transpose()
            .map_err(|_| AdminInboxError::Validation("listing must be a valid id".into()))?;

        Ok((
            InboxFilter {
                listing_id,
                unread_only: self.unread.unwrap_or(false),
            },
            PageRequest::new(self.page, self.limit),
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminInboxError {
    Validation(String),
    QueryFailed(String),
}

impl fmt::Display for AdminInboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminInboxError::Validation(msg) => write!(f, "{}", msg),
            AdminInboxError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

/// Messages addressed to the admins, with sender details.
#[async_trait]
pub trait AdminInboxUseCase: Send + Sync {
    async fn execute(
        &self,
        input: InboxInput,
    ) -> Result<PageResult<InboxMessage>, AdminInboxError>;
}
