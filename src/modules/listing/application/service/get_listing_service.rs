use async_trait::async_trait;
use uuid::Uuid;

use super::creators::attach_creator;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::listing::application::domain::entities::{ListingView, Viewer};
use crate::modules::listing::application::ports::incoming::use_cases::{
    GetListingError, GetListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingQuery;

pub struct GetListingService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    listings: Q,
    users: U,
}

impl<Q, U> GetListingService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    pub fn new(listings: Q, users: U) -> Self {
        Self { listings, users }
    }
}

#[async_trait]
impl<Q, U> GetListingUseCase for GetListingService<Q, U>
where
    Q: ListingQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        listing_id: Uuid,
        viewer: Option<Viewer>,
    ) -> Result<ListingView, GetListingError> {
        let listing = self
            .listings
            .find_by_id(listing_id)
            .await
            .map_err(|e| GetListingError::QueryFailed(e.to_string()))?
            .ok_or(GetListingError::NotFound)?;

        // Hidden rows look exactly like missing ones to everyone else
        if !listing.visible_to(viewer.as_ref()) {
            return Err(GetListingError::NotFound);
        }

        attach_creator(&self.users, listing)
            .await
            .map_err(|e| GetListingError::QueryFailed(e.to_string()))
    }
}
