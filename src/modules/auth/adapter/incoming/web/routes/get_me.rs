use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Profile of the calling user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "User no longer exists", body = ApiError),
    )
)]
#[get("/api/auth/me")]
pub async fn get_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to fetch profile");
            ApiResponse::store_error("Error fetching user", &msg)
        }
    }
}
