use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::listing::application::domain::entities::{ListingView, Viewer};
use crate::modules::listing::application::ports::incoming::use_cases::GetListingError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Get one listing
///
/// Public listings are returned to anyone. Hidden ones (pending approval or
/// rejected) only to their creator and admins; everyone else gets 404.
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = "listings",
    params(("id" = Uuid, Path, description = "Listing id")),
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Listing with creator", body = ListingView),
        (
            status = 404,
            description = "Unknown or hidden listing",
            body = ApiError,
            example = json!({"code": "LISTING_NOT_FOUND", "message": "Listing not found"})
        ),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[get("/api/listings/{id}")]
pub async fn get_listing_handler(
    user: Option<AuthenticatedUser>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing_id = path.into_inner();
    let viewer = user.map(|u| Viewer {
        user_id: u.user_id,
        is_admin: u.is_admin(),
    });

    match data.listing.get.execute(listing_id, viewer).await {
        Ok(listing) => ApiResponse::success(listing),

        Err(GetListingError::NotFound) => {
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }

        Err(GetListingError::QueryFailed(msg)) => {
            error!(listing_id = %listing_id, error = %msg, "Failed to fetch listing");
            ApiResponse::store_error("Error fetching listing", &msg)
        }
    }
}
