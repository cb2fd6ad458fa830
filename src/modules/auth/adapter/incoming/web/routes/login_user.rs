use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "abebe@example.com")]
    pub email: String,
    #[schema(example = "secret1")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// JWT refresh token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
    pub user: UserProfile,
}

/// User login
///
/// Authenticates with email and password and returns JWT access and refresh tokens.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ApiError,
            example = json!({"code": "INVALID_CREDENTIALS", "message": "Invalid email or password"})
        ),
        (status = 500, description = "Internal server error", body = ApiError),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let result = data
        .auth
        .login
        .execute(LoginUserInput {
            email: dto.email,
            password: dto.password,
        })
        .await;

    match result {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(LoginResponse {
                token: session.access_token,
                refresh_token: session.refresh_token,
                user: session.user,
            })
        }

        Err(LoginUserError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginUserError::RepositoryError(msg)) => {
            error!(error = %msg, "User lookup failed during login");
            ApiResponse::store_error("Error logging in", &msg)
        }

        Err(e @ LoginUserError::HashingFailed(_)) | Err(e @ LoginUserError::TokenFailed(_)) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
