use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenError;

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshTokenError {
    EmptyToken,
    TokenExpired,
    TokenInvalid,
    InvalidTokenType,
    UserNotFound,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshTokenError::EmptyToken => write!(f, "Refresh token cannot be empty"),
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshTokenError::UserNotFound => write!(f, "User no longer exists"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

/// Exchanges a refresh token for an access token built from the current user record.
#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}
