use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::list_listings::ListingPageResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ModerationQueueError, ModerationQueueInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ModerationQueueQuery {
    /// `active`, `pending`, `sold` or `rejected`
    pub status: Option<String>,
    pub approved: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// All listings for moderation, newest first
#[utoipa::path(
    get,
    path = "/api/admin/listings",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(ModerationQueueQuery),
    responses(
        (status = 200, description = "Listings matching the filters", body = ListingPageResponse),
        (status = 400, description = "Unknown status", body = ApiError),
        (status = 403, description = "Caller is not an admin", body = ApiError),
    )
)]
#[get("/api/admin/listings")]
pub async fn get_moderation_queue_handler(
    admin: AdminUser,
    query: web::Query<ModerationQueueQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();
    let input = ModerationQueueInput {
        status: q.status,
        approved: q.approved,
        page: q.page,
        limit: q.limit,
    };

    match data.listing.moderation_queue.execute(input).await {
        Ok(page) => ApiResponse::success(ListingPageResponse::from(page)),

        Err(ModerationQueueError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(ModerationQueueError::QueryFailed(msg)) => {
            error!(admin_id = %admin.user_id, error = %msg, "Failed to load moderation queue");
            ApiResponse::store_error("Error fetching listings", &msg)
        }
    }
}
