use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::ListingView;
use crate::shared::domain::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ListMyListingsError {
    QueryFailed(String),
}

impl fmt::Display for ListMyListingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMyListingsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

/// Every listing the caller created, whatever its state.
#[async_trait]
pub trait ListMyListingsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ListingView>, ListMyListingsError>;
}
