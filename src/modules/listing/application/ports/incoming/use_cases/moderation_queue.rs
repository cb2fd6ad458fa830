use async_trait::async_trait;
use std::fmt;

use crate::modules::listing::application::domain::entities::{ListingStatus, ListingView};
use crate::modules::listing::application::ports::outgoing::ListingScope;
use crate::shared::domain::{PageRequest, PageResult};

#[derive(Debug, Clone, Default)]
pub struct ModerationQueueInput {
    pub status: Option<String>,
    pub approved: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ModerationQueueInput {
    pub fn validate(self) -> Result<(ListingScope, PageRequest), ModerationQueueError> {
        let status = self
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<ListingStatus>())
            .transpose()
            .map_err(ModerationQueueError::Validation)?;

        Ok((
            ListingScope::Moderation {
                status,
                approved: self.approved,
            },
            PageRequest::new(self.page, self.limit),
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModerationQueueError {
    Validation(String),
    QueryFailed(String),
}

impl fmt::Display for ModerationQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModerationQueueError::Validation(msg) => write!(f, "{}", msg),
            ModerationQueueError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait ModerationQueueUseCase: Send + Sync {
    async fn execute(
        &self,
        input: ModerationQueueInput,
    ) -> Result<PageResult<ListingView>, ModerationQueueError>;
}
