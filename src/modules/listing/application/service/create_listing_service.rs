use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::listing::application::domain::entities::{
    ContactInfo, CreatorSummary, ListingView,
};
use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingError, CreateListingUseCase, ListingDraft,
};
use crate::modules::listing::application::ports::outgoing::{
    ListingRepository, ListingRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateListingService<R, U>
where
    R: ListingRepository,
    U: UserQuery,
{
    repository: R,
    users: U,
}

impl<R, U> CreateListingService<R, U>
where
    R: ListingRepository,
    U: UserQuery,
{
    pub fn new(repository: R, users: U) -> Self {
        Self { repository, users }
    }
}

#[async_trait]
impl<R, U> CreateListingUseCase for CreateListingService<R, U>
where
    R: ListingRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        creator_id: Uuid,
        draft: ListingDraft,
    ) -> Result<ListingView, CreateListingError> {
        let valid = draft.validate()?;

        let creator = self
            .users
            .find_by_id(creator_id)
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::CreatorNotFound)?;

        let contact = ContactInfo {
            name: creator.name.clone(),
            phone: creator.phone.clone(),
            email: creator.email.clone(),
        };

        let listing = self
            .repository
            .create_listing(valid.into_new_listing(creator.id, contact))
            .await
            .map_err(|e| match e {
                ListingRepositoryError::DatabaseError(msg)
                | ListingRepositoryError::SerializationError(msg) => {
                    CreateListingError::RepositoryError(msg)
                }
                ListingRepositoryError::NotFound => CreateListingError::RepositoryError(
                    "unexpected not found while creating listing".to_string(),
                ),
            })?;

        Ok(ListingView::new(listing, CreatorSummary::from(creator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Role;
    use crate::modules::listing::application::domain::entities::ListingStatus;
    use crate::tests::support::{sample_user, InMemoryStore};

    fn draft() -> ListingDraft {
        ListingDraft {
            title: Some("Toyota Vitz 2012".into()),
            description: Some("Clean, one owner".into()),
            category: Some("vehicle".into()),
            listing_type: Some("hatchback".into()),
            price: Some(850_000.0),
            region: Some("oromia".into()),
            location: Some("Adama".into()),
            ..Default::default()
        }
    }

    fn service(store: &InMemoryStore) -> CreateListingService<InMemoryStore, InMemoryStore> {
        CreateListingService::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn stamps_creator_and_contact_snapshot() {
        let store = InMemoryStore::new();
        let user = sample_user(Role::User);
        store.seed_user(user.clone());

        let view = service(&store).execute(user.id, draft()).await.unwrap();

        assert_eq!(view.created_by.id, user.id);
        assert_eq!(view.contact_info.name, user.name);
        assert_eq!(view.contact_info.phone, user.phone);
        assert_eq!(view.contact_info.email, user.email);

        let stored = store.listing(view.id).unwrap();
        assert_eq!(stored.created_by, user.id);
        assert_eq!(stored.status, ListingStatus::Active);
        assert!(!stored.approved_by_admin);
        assert_eq!(stored.admin_notes, None);
    }

    #[tokio::test]
    async fn invalid_draft_is_not_stored() {
        let store = InMemoryStore::new();
        let user = sample_user(Role::User);
        store.seed_user(user.clone());

        let result = service(&store)
            .execute(
                user.id,
                ListingDraft {
                    price: Some(-5.0),
                    ..draft()
                },
            )
            .await;

        assert!(matches!(result, Err(CreateListingError::Validation(_))));
        assert_eq!(store.listing_count(), 0);
    }

    #[tokio::test]
    async fn unknown_creator_is_rejected() {
        let store = InMemoryStore::new();

        let result = service(&store).execute(Uuid::new_v4(), draft()).await;

        assert_eq!(result.unwrap_err(), CreateListingError::CreatorNotFound);
    }
}
