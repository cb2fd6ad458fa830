use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchProfileError {
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProfileError::UserNotFound => write!(f, "User not found"),
            FetchProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError>;
}
