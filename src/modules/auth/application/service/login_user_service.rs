use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::AuthSession;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserInput, LoginUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

use super::session::issue_session;

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, input: LoginUserInput) -> Result<AuthSession, LoginUserError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() || input.password.is_empty() {
            return Err(LoginUserError::InvalidCredentials);
        }

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginUserError::RepositoryError(e.to_string()))?
            .ok_or(LoginUserError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&input.password, &user.password_hash)
            .await
            .map_err(|e| LoginUserError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(LoginUserError::InvalidCredentials);
        }

        issue_session(self.tokens.as_ref(), user)
            .map_err(|e| LoginUserError::TokenFailed(e.to_string()))
    }
}
