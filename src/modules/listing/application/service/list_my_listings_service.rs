use async_trait::async_trait;
use uuid::Uuid;

use super::creators::attach_creators_to_page;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::listing::application::domain::entities::ListingView;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ListMyListingsError, ListMyListingsUseCase,
};
use crate::modules::listing::application::ports::outgoing::{ListingQuery, ListingScope};
use crate::shared::domain::{PageRequest, PageResult};

pub struct ListMyListingsService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    listings: Q,
    users: U,
}

impl<Q, U> ListMyListingsService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    pub fn new(listings: Q, users: U) -> Self {
        Self { listings, users }
    }
}

#[async_trait]
impl<Q, U> ListMyListingsUseCase for ListMyListingsService<Q, U>
where
    Q: ListingQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ListingView>, ListMyListingsError> {
        let result = self
            .listings
            .list(ListingScope::CreatedBy(owner), page)
            .await
            .map_err(|e| ListMyListingsError::QueryFailed(e.to_string()))?;

        attach_creators_to_page(&self.users, result)
            .await
            .map_err(|e| ListMyListingsError::QueryFailed(e.to_string()))
    }
}
