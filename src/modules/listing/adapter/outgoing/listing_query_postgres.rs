use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::listings::{Column, Entity, Model};
use crate::modules::listing::application::domain::entities::{Listing, ListingStatus};
use crate::modules::listing::application::ports::outgoing::{
    ListingQuery, ListingQueryError, ListingScope,
};
use crate::shared::domain::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ListingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListingQuery for ListingQueryPostgres {
    async fn find_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, ListingQueryError> {
        let model = Entity::find_by_id(listing_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(to_domain).transpose()
    }

    async fn list(
        &self,
        scope: ListingScope,
        page: PageRequest,
    ) -> Result<PageResult<Listing>, ListingQueryError> {
        let query = Entity::find()
            .filter(scope_condition(&scope))
            .order_by_desc(Column::CreatedAt);

        // Count and page are separate statements
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        debug!(total, returned = rows.len(), page = page.page(), "Listed listings");

        let items = rows
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// WHERE clause for a scope. The public scope always starts from the
/// visibility condition; the optional filters can only narrow it.
pub(crate) fn scope_condition(scope: &ListingScope) -> Condition {
    match scope {
        ListingScope::Public(filter) => {
            let mut cond = Condition::all()
                .add(Column::Status.eq(ListingStatus::Active.as_str()))
                .add(Column::ApprovedByAdmin.eq(true));

            if let Some(category) = filter.category {
                cond = cond.add(Column::Category.eq(category.as_str()));
            }
            if let Some(region) = filter.region {
                cond = cond.add(Column::Region.eq(region.as_str()));
            }
            if let Some(ref listing_type) = filter.listing_type {
                cond = cond.add(Column::ListingType.eq(listing_type.as_str()));
            }
            if let Some(min) = filter.min_price {
                cond = cond.add(Column::Price.gte(min));
            }
            if let Some(max) = filter.max_price {
                cond = cond.add(Column::Price.lte(max));
            }

            cond
        }

        ListingScope::CreatedBy(owner) => Condition::all().add(Column::CreatedBy.eq(*owner)),

        ListingScope::Moderation { status, approved } => {
            let mut cond = Condition::all();
            if let Some(status) = status {
                cond = cond.add(Column::Status.eq(status.as_str()));
            }
            if let Some(approved) = approved {
                cond = cond.add(Column::ApprovedByAdmin.eq(*approved));
            }
            cond
        }
    }
}

fn to_domain(model: Model) -> Result<Listing, ListingQueryError> {
    model
        .into_domain()
        .map_err(ListingQueryError::SerializationError)
}

fn map_db_err(e: DbErr) -> ListingQueryError {
    ListingQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
