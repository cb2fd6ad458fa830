use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::messages::{Column, Entity};
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::outgoing::{
    InboxFilter, MessageQuery, MessageQueryError,
};
use crate::shared::domain::{PageRequest, PageResult};

#[derive(Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn list_by_sender(&self, sender: Uuid) -> Result<Vec<Message>, MessageQueryError> {
        let rows = Entity::find()
            .filter(Column::FromUser.eq(sender))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn inbox(
        &self,
        filter: InboxFilter,
        page: PageRequest,
    ) -> Result<PageResult<Message>, MessageQueryError> {
        let query = Entity::find()
            .filter(inbox_condition(&filter))
            .order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        debug!(total, returned = rows.len(), page = page.page(), "Listed inbox");

        Ok(PageResult::new(
            rows.into_iter().map(Message::from).collect(),
            page,
            total,
        ))
    }
}

pub(crate) fn inbox_condition(filter: &InboxFilter) -> Condition {
    let mut cond = Condition::all().add(Column::ToAdmin.eq(true));
    if let Some(listing_id) = filter.listing_id {
        cond = cond.add(Column::ListingId.eq(listing_id));
    }
    if filter.unread_only {
        cond = cond.add(Column::IsRead.eq(false));
    }
    cond
}

fn map_db_err(e: DbErr) -> MessageQueryError {
    MessageQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::message::adapter::outgoing::sea_orm_entity::messages::Model;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};
    use std::collections::BTreeMap;

    fn sql_for(filter: InboxFilter) -> String {
        Entity::find()
            .filter(inbox_condition(&filter))
            .build(DatabaseBackend::Postgres)
            .to_string()
            .to_lowercase()
    }

    fn model(from_user: Uuid) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            listing_id: Uuid::new_v4(),
            from_user,
            to_admin: true,
            body: "hello".to_string(),
            is_read: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn default_inbox_has_no_optional_filters() {
        let sql = sql_for(InboxFilter::default());

        assert!(sql.contains(r#""to_admin" = true"#), "{sql}");
        assert!(!sql.contains(r#""is_read" ="#), "{sql}");
        assert!(!sql.contains(r#""listing_id" ="#), "{sql}");
    }

    #[test]
    fn unread_and_listing_filters_narrow() {
        let sql = sql_for(InboxFilter {
            listing_id: Some(Uuid::new_v4()),
            unread_only: true,
        });

        assert!(sql.contains(r#""is_read" = false"#), "{sql}");
        assert!(sql.contains(r#""listing_id" ="#), "{sql}");
    }

    #[tokio::test]
    async fn list_by_sender_maps_rows() {
        let me = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(me), model(me)]])
            .into_connection();

        let messages = MessageQueryPostgres::new(Arc::new(db))
            .list_by_sender(me)
            .await
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.from_user == me));
    }

    #[tokio::test]
    async fn inbox_counts_then_pages() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(3)),
            )])]])
            .append_query_results(vec![vec![model(Uuid::new_v4())]])
            .into_connection();

        let page = MessageQueryPostgres::new(Arc::new(db))
            .inbox(InboxFilter::default(), PageRequest::new(Some(3), Some(1)))
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn inbox_db_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let result = MessageQueryPostgres::new(Arc::new(db))
            .inbox(InboxFilter::default(), PageRequest::default())
            .await;

        assert!(matches!(result, Err(MessageQueryError::DatabaseError(_))));
    }
}
