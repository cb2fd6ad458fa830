use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::AuthSession;

#[derive(Debug, Clone)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginUserError {
    /// Unknown email and wrong password share this variant.
    InvalidCredentials,
    HashingFailed(String),
    TokenFailed(String),
    RepositoryError(String),
}

impl fmt::Display for LoginUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginUserError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginUserError::HashingFailed(msg) => write!(f, "password verification failed: {}", msg),
            LoginUserError::TokenFailed(msg) => write!(f, "token generation failed: {}", msg),
            LoginUserError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginUserInput) -> Result<AuthSession, LoginUserError>;
}
