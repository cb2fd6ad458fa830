use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, UpdateProfileError> {
        let data = input.validate()?;

        self.repository
            .update_profile(user_id, data)
            .await
            .map(UserProfile::from)
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
