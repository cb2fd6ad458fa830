use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::list_listings::ListingPageResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::listing::application::ports::incoming::use_cases::ListMyListingsError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::domain::PageRequest;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl From<PageQuery> for PageRequest {
    fn from(q: PageQuery) -> Self {
        PageRequest::new(q.page, q.limit)
    }
}

/// Listings created by the caller, in every state
#[utoipa::path(
    get,
    path = "/api/listings/mine",
    tag = "listings",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Caller's listings", body = ListingPageResponse),
        (status = 401, description = "Missing or invalid token", body = ApiError),
    )
)]
#[get("/api/listings/mine")]
pub async fn get_my_listings_handler(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .listing
        .mine
        .execute(user.user_id, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(ListingPageResponse::from(page)),

        Err(ListMyListingsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list own listings");
            ApiResponse::store_error("Error fetching listings", &msg)
        }
    }
}
