use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::{Language, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::domain::Region;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[schema(value_type = Option<Region>)]
    pub region: Option<String>,
    #[schema(value_type = Option<Language>)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    #[schema(example = "Profile updated")]
    pub message: String,
    pub user: UserProfile,
}

#[utoipa::path(
    patch,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UpdateProfileResponse),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError),
    )
)]
#[patch("/api/auth/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = UpdateProfileInput {
        name: dto.name,
        phone: dto.phone,
        region: dto.region,
        language: dto.language,
    };

    match data.auth.update_profile.execute(user.user_id, input).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(UpdateProfileResponse {
                message: "Profile updated".to_string(),
                user: profile,
            })
        }

        Err(UpdateProfileError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to update profile");
            ApiResponse::store_error("Error updating profile", &msg)
        }
    }
}
