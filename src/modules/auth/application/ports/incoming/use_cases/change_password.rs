use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChangePasswordError {
    Validation(String),
    WrongPassword,
    UserNotFound,
    HashingFailed(String),
    RepositoryError(String),
}

impl fmt::Display for ChangePasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangePasswordError::Validation(msg) => write!(f, "{}", msg),
            ChangePasswordError::WrongPassword => write!(f, "Current password is incorrect"),
            ChangePasswordError::UserNotFound => write!(f, "User not found"),
            ChangePasswordError::HashingFailed(msg) => write!(f, "hashing failed: {}", msg),
            ChangePasswordError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError>;
}
