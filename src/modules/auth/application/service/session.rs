use crate::modules::auth::application::domain::entities::{AuthSession, User};
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenError, TokenProvider, TokenSubject,
};

/// Mints an access/refresh pair for `user`.
pub(crate) fn issue_session(
    tokens: &dyn TokenProvider,
    user: User,
) -> Result<AuthSession, TokenError> {
    let subject = TokenSubject {
        user_id: user.id,
        role: user.role,
        is_verified: user.is_verified,
    };

    Ok(AuthSession {
        access_token: tokens.generate_access_token(subject)?,
        refresh_token: tokens.generate_refresh_token(subject)?,
        user: user.into(),
    })
}
