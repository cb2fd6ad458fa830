use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::{Language, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::domain::Region;
use crate::AppState;

/// Registration payload. A client-sent `role` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "Abebe Kebede")]
    pub name: String,
    #[schema(example = "abebe@example.com")]
    pub email: String,
    #[schema(example = "+251911000000")]
    pub phone: String,
    /// At least 6 characters
    #[schema(example = "secret1")]
    pub password: String,
    #[schema(value_type = Region)]
    pub region: String,
    #[schema(value_type = Option<Language>)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    #[schema(example = "User registered successfully")]
    pub message: String,
    /// JWT access token
    pub token: String,
    /// JWT refresh token
    pub refresh_token: String,
    pub user: UserProfile,
}

/// Register a new user
///
/// Creates a plain `user` account and returns a token pair.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterUserResponse),
        (
            status = 400,
            description = "Validation failed or email already registered",
            body = ApiError,
            example = json!({"code": "USER_EXISTS", "message": "User already exists"})
        ),
        (status = 500, description = "Internal server error", body = ApiError),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = RegisterUserInput {
        name: dto.name,
        email: dto.email,
        phone: dto.phone,
        password: dto.password,
        region: dto.region,
        language: dto.language,
    };

    match data.auth.register.execute(input).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User registered");
            ApiResponse::created(RegisterUserResponse {
                message: "User registered successfully".to_string(),
                token: session.access_token,
                refresh_token: session.refresh_token,
                user: session.user,
            })
        }

        Err(RegisterUserError::Validation(msg)) => {
            warn!(reason = %msg, "Registration rejected");
            ApiResponse::validation_error(&msg)
        }

        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::bad_request("USER_EXISTS", "User already exists")
        }

        Err(RegisterUserError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to register user");
            ApiResponse::store_error("Error registering user", &msg)
        }

        Err(e @ RegisterUserError::HashingFailed(_)) | Err(e @ RegisterUserError::TokenFailed(_)) => {
            error!(error = %e, "Failed to register user");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{AuthSession, Role};
    use crate::modules::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::sample_user;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct StubRegister(Result<AuthSession, RegisterUserError>);

    #[async_trait]
    impl RegisterUserUseCase for StubRegister {
        async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
            // Make sure the raw fields reach the use case unchanged
            assert_eq!(input.region, "amhara");
            self.0.clone()
        }
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Abebe",
            "email": "abebe@example.com",
            "phone": "0911000000",
            "password": "secret1",
            "region": "amhara",
            "role": "admin"
        })
    }

    async fn call(result: Result<AuthSession, RegisterUserError>) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_register_user(StubRegister(result))
            .build();
        let app = test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_201_with_tokens_and_profile() {
        let user = sample_user(Role::User);
        let (status, body) = call(Ok(AuthSession {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            user: user.into(),
        }))
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["token"], "access");
        assert_eq!(body["refreshToken"], "refresh");
        assert_eq!(body["user"]["role"], "user");
        assert!(body["user"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn duplicate_email_is_400() {
        let (status, body) = call(Err(RegisterUserError::EmailAlreadyExists)).await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "USER_EXISTS");
    }

    #[actix_web::test]
    async fn validation_error_is_400_with_message() {
        let (status, body) = call(Err(RegisterUserError::Validation(
            "Password must be at least 6 characters".into(),
        )))
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Password must be at least 6 characters");
    }

    #[actix_web::test]
    async fn hashing_failure_hides_detail() {
        let (status, body) = call(Err(RegisterUserError::HashingFailed("boom".into()))).await;

        assert_eq!(status, 500);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(body.get("error").is_none());
    }
}
