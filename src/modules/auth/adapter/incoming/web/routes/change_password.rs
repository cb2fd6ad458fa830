use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordError, ChangePasswordInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    /// At least 6 characters
    pub new_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChangePasswordResponse {
    #[schema(example = "Password updated")]
    pub message: String,
}

#[utoipa::path(
    patch,
    path = "/api/auth/me/password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ChangePasswordResponse),
        (status = 400, description = "New password too short", body = ApiError),
        (status = 401, description = "Wrong current password or invalid token", body = ApiError),
    )
)]
#[patch("/api/auth/me/password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = ChangePasswordInput {
        current_password: dto.current_password,
        new_password: dto.new_password,
    };

    match data.auth.change_password.execute(user.user_id, input).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::success(ChangePasswordResponse {
                message: "Password updated".to_string(),
            })
        }

        Err(ChangePasswordError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(ChangePasswordError::WrongPassword) => {
            warn!(user_id = %user.user_id, "Password change with wrong current password");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Current password is incorrect")
        }

        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to store password");
            ApiResponse::store_error("Error updating password", &msg)
        }

        Err(ChangePasswordError::HashingFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Password hashing failed");
            ApiResponse::internal_error()
        }
    }
}
