// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt user record: {0}")]
    SerializationError(String),
}

/// Read side of the user store.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;

    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    /// Batch lookup used to join creators and senders onto listing/message pages.
    async fn find_by_ids(&self, user_ids: &[Uuid]) -> Result<Vec<User>, UserQueryError>;
}
