use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;

pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .map(UserProfile::from)
            .ok_or(FetchProfileError::UserNotFound)
    }
}
