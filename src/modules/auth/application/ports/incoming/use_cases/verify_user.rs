use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyUserError {
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for VerifyUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyUserError::UserNotFound => write!(f, "User not found"),
            VerifyUserError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Admin action: flags a user account as verified.
#[async_trait]
pub trait VerifyUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, VerifyUserError>;
}
