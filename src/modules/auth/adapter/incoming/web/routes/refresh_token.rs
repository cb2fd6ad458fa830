use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::modules::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    /// New access token
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = RefreshTokenResponseBody),
        (status = 400, description = "Empty token", body = ApiError),
        (status = 401, description = "Invalid or expired refresh token", body = ApiError),
        (status = 500, description = "User lookup failed", body = ApiError),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(&req.refresh_token).await {
        Ok(token) => ApiResponse::success(RefreshTokenResponseBody { token }),

        Err(RefreshTokenError::EmptyToken) => {
            ApiResponse::validation_error("Refresh token cannot be empty")
        }

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(e @ RefreshTokenError::TokenInvalid) | Err(e @ RefreshTokenError::InvalidTokenType) => {
            warn!(error = %e, "Refresh rejected");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::UserNotFound) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "User no longer exists")
        }

        Err(RefreshTokenError::TokenGenerationFailed(msg)) => {
            error!(error = %msg, "Failed to issue access token");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to load user for refresh");
            ApiResponse::store_error("Error refreshing token", &msg)
        }
    }
}
