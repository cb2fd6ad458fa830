use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::{Category, Listing, ListingStatus};
use crate::shared::domain::{PageRequest, PageResult, Region};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Optional narrowing for the public browse. Price bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub category: Option<Category>,
    pub region: Option<Region>,
    pub listing_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Which rows a paginated read may return.
///
/// `Public` always carries the visibility condition
/// (`status = active AND approved_by_admin = true`); there is no variant that
/// lets an anonymous caller drop it.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingScope {
    Public(ListingFilter),
    CreatedBy(Uuid),
    Moderation {
        status: Option<ListingStatus>,
        approved: Option<bool>,
    },
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt listing record: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListingQuery: Send + Sync {
    /// Unscoped lookup. Callers apply visibility rules themselves.
    async fn find_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, ListingQueryError>;

    /// Newest first, offset paginated.
    async fn list(
        &self,
        scope: ListingScope,
        page: PageRequest,
    ) -> Result<PageResult<Listing>, ListingQueryError>;
}
