use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::ListingView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewListingError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ReviewListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewListingError::NotFound => write!(f, "Listing not found"),
            ReviewListingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Admin approval or rejection. Approving twice is a no-op.
#[async_trait]
pub trait ReviewListingUseCase: Send + Sync {
    async fn execute(
        &self,
        listing_id: Uuid,
        decision: ReviewDecision,
        notes: Option<String>,
    ) -> Result<ListingView, ReviewListingError>;
}
