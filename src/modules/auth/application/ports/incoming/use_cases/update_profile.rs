use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Language, UserProfile};
use crate::modules::auth::application::ports::outgoing::user_repository::UpdateProfileData;
use crate::shared::domain::Region;

/// Raw profile changes. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
}

impl UpdateProfileInput {
    pub fn validate(self) -> Result<UpdateProfileData, UpdateProfileError> {
        let name = match self.name {
            Some(name) if name.trim().is_empty() => {
                return Err(UpdateProfileError::Validation("Name cannot be blank".into()))
            }
            other => other.map(|n| n.trim().to_string()),
        };

        let phone = match self.phone {
            Some(phone) if phone.trim().is_empty() => {
                return Err(UpdateProfileError::Validation("Phone cannot be blank".into()))
            }
            other => other.map(|p| p.trim().to_string()),
        };

        let region = self
            .region
            .map(|r| r.parse::<Region>())
            .transpose()
            .map_err(|e| UpdateProfileError::Validation(e.to_string()))?;

        let language = self
            .language
            .map(|l| l.parse::<Language>())
            .transpose()
            .map_err(UpdateProfileError::Validation)?;

        Ok(UpdateProfileData {
            name,
            phone,
            region,
            language,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateProfileError {
    Validation(String),
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileError::Validation(msg) => write!(f, "{}", msg),
            UpdateProfileError::UserNotFound => write!(f, "User not found"),
            UpdateProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UserProfile, UpdateProfileError>;
}
