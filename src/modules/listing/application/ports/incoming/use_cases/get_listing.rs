use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::{ListingView, Viewer};

#[derive(Debug, Clone, PartialEq)]
pub enum GetListingError {
    /// Unknown id, or a hidden listing the viewer may not see.
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetListingError::NotFound => write!(f, "Listing not found"),
            GetListingError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetListingUseCase: Send + Sync {
    async fn execute(
        &self,
        listing_id: Uuid,
        viewer: Option<Viewer>,
    ) -> Result<ListingView, GetListingError>;
}
