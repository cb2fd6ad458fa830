use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{AuthSession, Role};
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserInput, RegisterUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

use super::session::issue_session;

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
        let valid = input.validate()?;

        let existing = self
            .query
            .find_by_email(&valid.email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // Role is never taken from the client
        let user = self
            .repository
            .create_user(CreateUserData {
                name: valid.name,
                email: valid.email,
                phone: valid.phone,
                password_hash,
                region: valid.region,
                language: valid.language,
                role: Role::User,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        issue_session(self.tokens.as_ref(), user)
            .map_err(|e| RegisterUserError::TokenFailed(e.to_string()))
    }
}
