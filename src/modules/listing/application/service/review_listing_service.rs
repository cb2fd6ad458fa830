use async_trait::async_trait;
use uuid::Uuid;

use super::creators::attach_creator;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::listing::application::domain::entities::ListingView;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ReviewDecision, ReviewListingError, ReviewListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::{
    ListingRepository, ListingRepositoryError, ModerationUpdate,
};

pub struct ReviewListingService<R, U>
where
    R: ListingRepository,
    U: UserQuery,
{
    repository: R,
    users: U,
}

impl<R, U> ReviewListingService<R, U>
where
    R: ListingRepository,
    U: UserQuery,
{
    pub fn new(repository: R, users: U) -> Self {
        Self { repository, users }
    }
}

#[async_trait]
impl<R, U> ReviewListingUseCase for ReviewListingService<R, U>
where
    R: ListingRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        listing_id: Uuid,
        decision: ReviewDecision,
        notes: Option<String>,
    ) -> Result<ListingView, ReviewListingError> {
        let update = match decision {
            ReviewDecision::Approve => ModerationUpdate::approve(notes),
            ReviewDecision::Reject => ModerationUpdate::reject(notes),
        };

        let listing = self
            .repository
            .moderate(listing_id, update)
            .await
            .map_err(|e| match e {
                ListingRepositoryError::NotFound => ReviewListingError::NotFound,
                other => ReviewListingError::RepositoryError(other.to_string()),
            })?;

        attach_creator(&self.users, listing)
            .await
            .map_err(|e| ReviewListingError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::listing::application::domain::entities::ListingStatus;
    use crate::tests::support::{sample_listing, sample_user, InMemoryStore};

    fn setup() -> (InMemoryStore, Uuid) {
        let store = InMemoryStore::new();
        let owner = sample_user(Role::User);
        store.seed_user(owner.clone());
        let listing = sample_listing(owner.id, ListingStatus::Active, false);
        let id = listing.id;
        store.seed_listing(listing);
        (store, id)
    }

    fn service(store: &InMemoryStore) -> ReviewListingService<InMemoryStore, InMemoryStore> {
        ReviewListingService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn approve_sets_flags_and_notes() {
        let (store, id) = setup();

        let view = service(&store)
            .execute(id, ReviewDecision::Approve, Some("ok".into()))
            .await
            .unwrap();

        assert!(view.approved_by_admin);
        assert_eq!(view.status, ListingStatus::Active);
        assert_eq!(view.admin_notes.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn approve_is_idempotent() {
        let (store, id) = setup();
        let svc = service(&store);

        let first = svc.execute(id, ReviewDecision::Approve, None).await.unwrap();
        let second = svc.execute(id, ReviewDecision::Approve, None).await.unwrap();

        assert_eq!(first.approved_by_admin, second.approved_by_admin);
        assert_eq!(first.status, second.status);
    }

    #[tokio::test]
    async fn approve_then_reject_ends_rejected() {
        let (store, id) = setup();
        let svc = service(&store);

        svc.execute(id, ReviewDecision::Approve, Some("ok".into()))
            .await
            .unwrap();
        let view = svc
            .execute(id, ReviewDecision::Reject, Some("blurry photos".into()))
            .await
            .unwrap();

        assert!(!view.approved_by_admin);
        assert_eq!(view.status, ListingStatus::Rejected);
        assert_eq!(view.admin_notes.as_deref(), Some("blurry photos"));

        let stored = store.listing(id).unwrap();
        assert!(!stored.is_publicly_visible());
    }

    #[tokio::test]
    async fn reject_without_notes_clears_approval_notes() {
        let (store, id) = setup();
        let svc = service(&store);

        svc.execute(id, ReviewDecision::Approve, Some("ok".into()))
            .await
            .unwrap();
        let view = svc.execute(id, ReviewDecision::Reject, None).await.unwrap();

        assert_eq!(view.status, ListingStatus::Rejected);
        assert_eq!(view.admin_notes, None);
        assert_eq!(store.listing(id).unwrap().admin_notes, None);
    }

    #[tokio::test]
    async fn unknown_listing_is_not_found() {
        let store = InMemoryStore::new();

        let result = service(&store)
            .execute(Uuid::new_v4(), ReviewDecision::Reject, None)
            .await;

        assert_eq!(result.unwrap_err(), ReviewListingError::NotFound);
    }
}
