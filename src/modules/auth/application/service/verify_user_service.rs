use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    VerifyUserError, VerifyUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct VerifyUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> VerifyUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> VerifyUserUseCase for VerifyUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, VerifyUserError> {
        self.repository
            .mark_verified(user_id)
            .await
            .map(UserProfile::from)
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyUserError::UserNotFound,
                other => VerifyUserError::RepositoryError(other.to_string()),
            })
    }
}
