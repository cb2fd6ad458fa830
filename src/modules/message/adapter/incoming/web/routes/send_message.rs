use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    SendMessageError, SendMessageInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    /// Listing id
    #[schema(example = "3f1c2a9e-7b51-4d0e-9a63-1f8c2d4b5e60")]
    pub listing: Option<String>,
    #[schema(example = "Is the price negotiable?")]
    pub message: Option<String>,
}

/// `{message, data}` body shared by the message mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDataResponse {
    #[schema(example = "Message sent")]
    pub message: String,
    pub data: Message,
}

/// Send a message to the admins about a listing
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = MessageDataResponse),
        (status = 400, description = "Blank message or bad listing id", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "Unknown listing", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[post("/api/messages")]
pub async fn send_message_handler(
    user: AuthenticatedUser,
    req: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = SendMessageInput {
        listing: req.listing,
        message: req.message,
    };

    match data.message.send.execute(user.user_id, input).await {
        Ok(message) => ApiResponse::created(MessageDataResponse {
            message: "Message sent".to_string(),
            data: message,
        }),

        Err(SendMessageError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(SendMessageError::ListingNotFound) => {
            warn!(user_id = %user.user_id, "Message for unknown listing");
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }

        Err(SendMessageError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to store message");
            ApiResponse::store_error("Error sending message", &msg)
        }
    }
}
