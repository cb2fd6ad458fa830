use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::message::application::domain::entities::InboxMessage;
use crate::modules::message::application::ports::incoming::use_cases::{
    AdminInboxError, InboxInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::domain::PageResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InboxQuery {
    /// Only messages about this listing
    pub listing: Option<String>,
    /// Only unread messages
    pub unread: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxPageResponse {
    pub messages: Vec<InboxMessage>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total: u64,
}

impl From<PageResult<InboxMessage>> for InboxPageResponse {
    fn from(page: PageResult<InboxMessage>) -> Self {
        Self {
            total_pages: page.total_pages(),
            current_page: page.page,
            total: page.total,
            messages: page.items,
        }
    }
}

/// Admin inbox, newest first
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(InboxQuery),
    responses(
        (status = 200, description = "Messages with sender details", body = InboxPageResponse),
        (status = 400, description = "Bad listing id", body = ApiError),
        (status = 403, description = "Caller is not an admin", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[get("/api/admin/messages")]
pub async fn get_inbox_handler(
    admin: AdminUser,
    query: web::Query<InboxQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();
    let input = InboxInput {
        listing: q.listing,
        unread: q.unread,
        page: q.page,
        limit: q.limit,
    };

    match data.message.inbox.execute(input).await {
        Ok(page) => ApiResponse::success(InboxPageResponse::from(page)),

        Err(AdminInboxError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(AdminInboxError::QueryFailed(msg)) => {
            error!(admin_id = %admin.user_id, error = %msg, "Failed to load inbox");
            ApiResponse::store_error("Error fetching messages", &msg)
        }
    }
}
