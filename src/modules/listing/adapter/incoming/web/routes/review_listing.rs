use actix_web::{patch, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::listing::application::domain::entities::ListingView;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ReviewDecision, ReviewListingError,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Optional body for approve and reject.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReviewListingRequest {
    #[schema(example = "Photos checked")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewListingResponse {
    #[schema(example = "Listing approved")]
    pub message: String,
    pub listing: ListingView,
}

async fn review(
    admin: AdminUser,
    listing_id: Uuid,
    decision: ReviewDecision,
    body: Option<web::Json<ReviewListingRequest>>,
    data: &AppState,
) -> HttpResponse {
    let notes = body.and_then(|b| b.into_inner().notes);

    let (done, failed) = match decision {
        ReviewDecision::Approve => ("Listing approved", "Error approving listing"),
        ReviewDecision::Reject => ("Listing rejected", "Error rejecting listing"),
    };

    match data.listing.review.execute(listing_id, decision, notes).await {
        Ok(listing) => {
            info!(
                admin_id = %admin.user_id,
                listing_id = %listing_id,
                decision = ?decision,
                "Listing reviewed"
            );
            ApiResponse::success(ReviewListingResponse {
                message: done.to_string(),
                listing,
            })
        }

        Err(ReviewListingError::NotFound) => {
            ApiResponse::not_found("LISTING_NOT_FOUND", "Listing not found")
        }

        Err(ReviewListingError::RepositoryError(msg)) => {
            error!(listing_id = %listing_id, error = %msg, "Listing review failed");
            ApiResponse::store_error(failed, &msg)
        }
    }
}

/// Approve a listing
///
/// Sets `approvedByAdmin=true` and `status=active` in one update.
#[utoipa::path(
    patch,
    path = "/api/listings/{id}/approve",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body(content = ReviewListingRequest, description = "Optional admin notes"),
    responses(
        (status = 200, description = "Listing approved", body = ReviewListingResponse),
        (status = 403, description = "Caller is not an admin", body = ApiError),
        (status = 404, description = "Unknown listing", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[patch("/api/listings/{id}/approve")]
pub async fn approve_listing_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    body: Option<web::Json<ReviewListingRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    review(admin, path.into_inner(), ReviewDecision::Approve, body, &data).await
}

/// Reject a listing
///
/// Sets `approvedByAdmin=false` and `status=rejected` in one update.
#[utoipa::path(
    patch,
    path = "/api/listings/{id}/reject",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body(content = ReviewListingRequest, description = "Optional admin notes"),
    responses(
        (status = 200, description = "Listing rejected", body = ReviewListingResponse),
        (status = 403, description = "Caller is not an admin", body = ApiError),
        (status = 404, description = "Unknown listing", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[patch("/api/listings/{id}/reject")]
pub async fn reject_listing_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    body: Option<web::Json<ReviewListingRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    review(admin, path.into_inner(), ReviewDecision::Reject, body, &data).await
}
