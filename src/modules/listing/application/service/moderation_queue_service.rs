use async_trait::async_trait;

use super::creators::attach_creators_to_page;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::listing::application::domain::entities::ListingView;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ModerationQueueError, ModerationQueueInput, ModerationQueueUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingQuery;
use crate::shared::domain::PageResult;

pub struct ModerationQueueService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    listings: Q,
    users: U,
}

impl<Q, U> ModerationQueueService<Q, U>
where
    Q: ListingQuery,
    U: UserQuery,
{
    pub fn new(listings: Q, users: U) -> Self {
        Self { listings, users }
    }
}

#[async_trait]
impl<Q, U> ModerationQueueUseCase for ModerationQueueService<Q, U>
where
    Q: ListingQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        input: ModerationQueueInput,
    ) -> Result<PageResult<ListingView>, ModerationQueueError> {
        let (scope, page) = input.validate()?;

        let result = self
            .listings
            .list(scope, page)
            .await
            .map_err(|e| ModerationQueueError::QueryFailed(e.to_string()))?;

        attach_creators_to_page(&self.users, result)
            .await
            .map_err(|e| ModerationQueueError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::listing::application::domain::entities::ListingStatus;
    use crate::tests::support::{sample_listing, sample_user, InMemoryStore};

    #[tokio::test]
    async fn filters_unapproved_listings() {
        let store = InMemoryStore::new();
        let owner = sample_user(Role::User);
        store.seed_user(owner.clone());
        store.seed_listing(sample_listing(owner.id, ListingStatus::Active, false));
        store.seed_listing(sample_listing(owner.id, ListingStatus::Active, false));
        store.seed_listing(sample_listing(owner.id, ListingStatus::Active, true));

        let page = ModerationQueueService::new(store.clone(), store.clone())
            .execute(ModerationQueueInput {
                approved: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|l| !l.approved_by_admin));
    }

    #[tokio::test]
    async fn no_filters_returns_everything() {
        let store = InMemoryStore::new();
        let owner = sample_user(Role::User);
        store.seed_user(owner.clone());
        store.seed_listing(sample_listing(owner.id, ListingStatus::Rejected, false));
        store.seed_listing(sample_listing(owner.id, ListingStatus::Sold, true));

        let page = ModerationQueueService::new(store.clone(), store.clone())
            .execute(ModerationQueueInput::default())
            .await
            .unwrap();

        assert_eq!(page.total, 2);
    }
}
