use actix_web::{patch, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::VerifyUserError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyUserResponse {
    #[schema(example = "User verified")]
    pub message: String,
    pub user: UserProfile,
}

#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/verify",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User verified", body = VerifyUserResponse),
        (status = 403, description = "Caller is not an admin", body = ApiError),
        (status = 404, description = "Unknown user", body = ApiError),
    )
)]
#[patch("/api/admin/users/{id}/verify")]
pub async fn verify_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.auth.verify_user.execute(user_id).await {
        Ok(profile) => {
            info!(admin_id = %admin.user_id, user_id = %user_id, "User verified");
            ApiResponse::success(VerifyUserResponse {
                message: "User verified".to_string(),
                user: profile,
            })
        }

        Err(VerifyUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(VerifyUserError::RepositoryError(msg)) => {
            error!(user_id = %user_id, error = %msg, "Failed to verify user");
            ApiResponse::store_error("Error verifying user", &msg)
        }
    }
}
