use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::sea_orm_entity::listings::{ActiveModel, Column, Entity, Model};
use crate::modules::listing::application::domain::entities::{Listing, ListingStatus};
use crate::modules::listing::application::ports::outgoing::{
    ListingRepository, ListingRepositoryError, ModerationUpdate, NewListing,
};

#[derive(Clone)]
pub struct ListingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListingRepository for ListingRepositoryPostgres {
    async fn create_listing(&self, listing: NewListing) -> Result<Listing, ListingRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(listing.title),
            description: Set(listing.description),
            category: Set(listing.category.as_str().to_string()),
            listing_type: Set(listing.listing_type),
            price: Set(listing.price),
            region: Set(listing.region.as_str().to_string()),
            location: Set(listing.location),
            images: Set(to_json(&listing.images)?),
            videos: Set(to_json(&listing.videos)?),
            features: Set(to_json(&listing.features)?),
            contact_name: Set(listing.contact_info.name),
            contact_phone: Set(listing.contact_info.phone),
            contact_email: Set(listing.contact_info.email),
            status: Set(ListingStatus::Active.as_str().to_string()),
            created_by: Set(listing.created_by),
            approved_by_admin: Set(false),
            admin_notes: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        info!(listing_id = %inserted.id, created_by = %inserted.created_by, "Listing stored");

        to_domain(inserted)
    }

    async fn moderate(
        &self,
        listing_id: Uuid,
        update: ModerationUpdate,
    ) -> Result<Listing, ListingRepositoryError> {
        let model = ActiveModel {
            approved_by_admin: Set(update.approved_by_admin),
            status: Set(update.status.as_str().to_string()),
            admin_notes: Set(update.admin_notes),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        // Single UPDATE ... RETURNING, no read-modify-write
        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(listing_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(ListingRepositoryError::NotFound)?;

        to_domain(row)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ListingRepositoryError> {
    serde_json::to_value(value).map_err(|e| ListingRepositoryError::SerializationError(e.to_string()))
}

fn to_domain(model: Model) -> Result<Listing, ListingRepositoryError> {
    model
        .into_domain()
        .map_err(ListingRepositoryError::SerializationError)
}

fn map_db_err(e: DbErr) -> ListingRepositoryError {
    ListingRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::listing::application::domain::entities::{
        Category, ContactInfo, MediaAsset,
    };
    use crate::shared::domain::Region;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn new_listing(created_by: Uuid) -> NewListing {
        NewListing {
            title: "Villa".to_string(),
            description: "Four rooms".to_string(),
            category: Category::House,
            listing_type: "villa".to_string(),
            price: 100_000.0,
            region: Region::AddisAbaba,
            location: "Bole".to_string(),
            images: vec![MediaAsset {
                url: "https://cdn/x.jpg".to_string(),
                filename: "x.jpg".to_string(),
            }],
            videos: vec![],
            features: BTreeMap::from([("bedrooms".to_string(), "4".to_string())]),
            contact_info: ContactInfo {
                name: "Abebe".to_string(),
                phone: "0911000000".to_string(),
                email: "abebe@example.com".to_string(),
            },
            created_by,
        }
    }

    fn row(created_by: Uuid, status: &str, approved: bool, notes: Option<&str>) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            title: "Villa".to_string(),
            description: "Four rooms".to_string(),
            category: "house".to_string(),
            listing_type: "villa".to_string(),
            price: 100_000.0,
            region: "addis_ababa".to_string(),
            location: "Bole".to_string(),
            images: serde_json::json!([{"url": "https://cdn/x.jpg", "filename": "x.jpg"}]),
            videos: serde_json::json!([]),
            features: serde_json::json!({"bedrooms": "4"}),
            contact_name: "Abebe".to_string(),
            contact_phone: "0911000000".to_string(),
            contact_email: "abebe@example.com".to_string(),
            status: status.to_string(),
            created_by,
            approved_by_admin: approved,
            admin_notes: notes.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_listing_returns_unapproved_row() {
        let creator = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(creator, "active", false, None)]])
            .into_connection();

        let listing = ListingRepositoryPostgres::new(Arc::new(db))
            .create_listing(new_listing(creator))
            .await
            .unwrap();

        assert_eq!(listing.created_by, creator);
        assert_eq!(listing.status, ListingStatus::Active);
        assert!(!listing.approved_by_admin);
    }

    #[tokio::test]
    async fn moderate_returns_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(Uuid::new_v4(), "rejected", false, Some("spam"))]])
            .into_connection();

        let listing = ListingRepositoryPostgres::new(Arc::new(db))
            .moderate(Uuid::new_v4(), ModerationUpdate::reject(Some("spam".into())))
            .await
            .unwrap();

        assert_eq!(listing.status, ListingStatus::Rejected);
        assert_eq!(listing.admin_notes.as_deref(), Some("spam"));
    }

    #[tokio::test]
    async fn moderate_without_notes_clears_stored_notes() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![row(Uuid::new_v4(), "rejected", false, None)]])
                .into_connection(),
        );
        let repo = ListingRepositoryPostgres::new(Arc::clone(&db));

        let listing = repo
            .moderate(Uuid::new_v4(), ModerationUpdate::reject(None))
            .await
            .unwrap();
        assert_eq!(listing.admin_notes, None);

        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        let set_clause = sql.split(" WHERE ").next().unwrap();
        assert!(
            set_clause.contains(r#""admin_notes" = $"#),
            "admin_notes missing from SET: {sql}"
        );
    }

    #[tokio::test]
    async fn moderate_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let result = ListingRepositoryPostgres::new(Arc::new(db))
            .moderate(Uuid::new_v4(), ModerationUpdate::approve(None))
            .await;

        assert!(matches!(result, Err(ListingRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn create_listing_db_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("insert failed".to_string())])
            .into_connection();

        let result = ListingRepositoryPostgres::new(Arc::new(db))
            .create_listing(new_listing(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(ListingRepositoryError::DatabaseError(_))));
    }
}
