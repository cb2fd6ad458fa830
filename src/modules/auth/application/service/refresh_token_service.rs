use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenUseCase,
};
use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenSubject, UserQuery};

pub struct RefreshTokenService<Q>
where
    Q: UserQuery,
{
    query: Q,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> RefreshTokenService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { query, tokens }
    }
}

#[async_trait]
impl<Q> RefreshTokenUseCase for RefreshTokenService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenError::EmptyToken);
        }

        let claims = self.tokens.verify_refresh_token(refresh_token)?;

        // Role and verification come from the store, not the old claims
        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                warn!(user_id = %claims.sub, "Refresh token for missing user");
                RefreshTokenError::UserNotFound
            })?;

        self.tokens
            .generate_access_token(TokenSubject {
                user_id: user.id,
                role: user.role,
                is_verified: user.is_verified,
            })
            .map_err(RefreshTokenError::from)
    }
}
