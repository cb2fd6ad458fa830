use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::ACCESS_TOKEN;
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller identity taken from a valid access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
    pub is_verified: bool,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let Some(tokens) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() else {
        tracing::error!("TokenProvider is not registered as app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    let Some(token) = extract_token_from_header(req) else {
        return Err(create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )));
    };

    let claims = tokens.verify_token(&token).map_err(|e| {
        tracing::warn!(error = %e, path = %req.path(), "Rejected bearer token");
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    let subject = claims.subject();
    Ok(AuthenticatedUser {
        user_id: subject.user_id,
        role: subject.role,
        is_verified: subject.is_verified,
    })
}

/// Authenticated caller holding the admin role.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser {
    pub user_id: Uuid,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|user| {
            if !user.is_admin() {
                tracing::warn!(user_id = %user.user_id, path = %req.path(), "Non-admin on admin route");
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Admin access required",
                )));
            }
            Ok(AdminUser {
                user_id: user.user_id,
            })
        });

        ready(result)
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
