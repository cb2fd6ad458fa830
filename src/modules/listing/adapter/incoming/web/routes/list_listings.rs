use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use crate::modules::listing::application::domain::entities::ListingView;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ListListingsError, ListListingsInput,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::domain::PageResult;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListListingsQuery {
    /// `house` or `vehicle`
    pub category: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
    /// Defaults to 1
    pub page: Option<u64>,
    /// Defaults to 12, capped at 100
    pub limit: Option<u64>,
}

impl From<ListListingsQuery> for ListListingsInput {
    fn from(q: ListListingsQuery) -> Self {
        ListListingsInput {
            category: q.category,
            region: q.region,
            listing_type: q.listing_type,
            min_price: q.min_price,
            max_price: q.max_price,
            page: q.page,
            limit: q.limit,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// Page body shared by every listing collection endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingPageResponse {
    pub listings: Vec<ListingView>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total: u64,
}

impl From<PageResult<ListingView>> for ListingPageResponse {
    fn from(page: PageResult<ListingView>) -> Self {
        Self {
            total_pages: page.total_pages(),
            current_page: page.page,
            total: page.total,
            listings: page.items,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Browse public listings
///
/// Only active listings approved by an admin are returned, newest first.
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = "listings",
    params(ListListingsQuery),
    responses(
        (status = 200, description = "One page of public listings", body = ListingPageResponse),
        (status = 400, description = "Unknown category/region or non-numeric price", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[get("/api/listings")]
pub async fn list_listings_handler(
    query: web::Query<ListListingsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.listing.list.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(ListingPageResponse::from(page)),

        Err(ListListingsError::Validation(msg)) => {
            warn!(reason = %msg, "Rejected listing filter");
            ApiResponse::validation_error(&msg)
        }

        Err(ListListingsError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list listings");
            ApiResponse::store_error("Error fetching listings", &msg)
        }
    }
}
