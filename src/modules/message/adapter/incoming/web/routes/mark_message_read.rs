use actix_web::{patch, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::send_message::MessageDataResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::message::application::ports::incoming::use_cases::MarkReadError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Mark a message as read
#[utoipa::path(
    patch,
    path = "/api/admin/messages/{id}/read",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message marked read", body = MessageDataResponse),
        (status = 403, description = "Caller is not an admin", body = ApiError),
        (status = 404, description = "Unknown message", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[patch("/api/admin/messages/{id}/read")]
pub async fn mark_message_read_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.message.mark_read.execute(message_id).await {
        Ok(message) => {
            info!(admin_id = %admin.user_id, message_id = %message_id, "Message marked read");
            ApiResponse::success(MessageDataResponse {
                message: "Message marked as read".to_string(),
                data: message,
            })
        }

        Err(MarkReadError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }

        Err(MarkReadError::RepositoryError(msg)) => {
            error!(message_id = %message_id, error = %msg, "Failed to mark message read");
            ApiResponse::store_error("Error updating message", &msg)
        }
    }
}
