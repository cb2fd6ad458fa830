use async_trait::async_trait;

use super::creators::attach_creators_to_page;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::listing::application::domain::entities::ListingView;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ListListingsError, ListListingsInput, ListListingsUseCase,
};
use crate::modules::listing::application::ports::outgoing::{ListingQuery, ListingScope};
use crate::shared::domain::PageResult;

pub struct ListListingsService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    listings: Q,
    users: U,
}

impl<Q, U> ListListingsService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    pub fn new(listings: Q, users: U) -> Self {
        Self { listings, users }
    }
}

#[async_trait]
impl<Q, U> ListListingsUseCase for ListListingsService<Q, U>
where
    Q: ListingQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        input: ListListingsInput,
    ) -> Result<PageResult<ListingView>, ListListingsError> {
        let (filter, page) = input.validate()?;

        let result = self
            .listings
            .list(ListingScope::Public(filter), page)
            .await
            .map_err(|e| ListListingsError::QueryFailed(e.to_string()))?;

        attach_creators_to_page(&self.users, result)
            .await
            .map_err(|e| ListListingsError::QueryFailed(e.to_string()))
    }
}
