use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::ListMyMessagesError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MyMessagesResponse {
    pub messages: Vec<Message>,
}

/// Messages sent by the caller, newest first
#[utoipa::path(
    get,
    path = "/api/messages/mine",
    tag = "messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's messages", body = MyMessagesResponse),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[get("/api/messages/mine")]
pub async fn get_my_messages_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.mine.execute(user.user_id).await {
        Ok(messages) => ApiResponse::success(MyMessagesResponse { messages }),

        Err(ListMyMessagesError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list own messages");
            ApiResponse::store_error("Error fetching messages", &msg)
        }
    }
}
