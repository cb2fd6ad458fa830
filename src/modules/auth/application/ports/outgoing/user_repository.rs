use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Language, Role, User};
use crate::shared::domain::Region;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    /// Already lowercased
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub region: Region,
    pub language: Language,
    pub role: Role,
}

/// Profile fields a user can change. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub region: Option<Region>,
    pub language: Option<Language>,
}

impl UpdateProfileData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.region.is_none()
            && self.language.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt user record: {0}")]
    SerializationError(String),
}

/// Write side of the user store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;
}
