use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::sea_orm_entity::messages::{ActiveModel, Column, Entity};
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};

/// Constraint name from the messages migration.
const LISTING_FK: &str = "fk_messages_listing_id";

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create_message(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            listing_id: Set(message.listing_id),
            from_user: Set(message.from_user),
            to_admin: Set(true),
            body: Set(message.body),
            is_read: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;
        info!(message_id = %inserted.id, listing_id = %inserted.listing_id, "Message stored");

        Ok(inserted.into())
    }

    async fn mark_read(&self, message_id: Uuid) -> Result<Message, MessageRepositoryError> {
        let model = ActiveModel {
            is_read: Set(true),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(message_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(MessageRepositoryError::NotFound)?;

        debug!(message_id = %message_id, "Message marked read");
        Ok(row.into())
    }
}

fn map_insert_err(e: DbErr) -> MessageRepositoryError {
    let text = e.to_string();
    if text.contains(LISTING_FK) {
        return MessageRepositoryError::ListingNotFound;
    }
    MessageRepositoryError::DatabaseError(text)
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}
