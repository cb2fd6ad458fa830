use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::listing::application::domain::entities::{
    Category, ListingView, MediaAsset,
};
use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingError, ListingDraft,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::shared::domain::Region;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

/// New listing. `createdBy`, `contactInfo`, `status`, `approvedByAdmin`
/// and `adminNotes` are set by the server; if sent they are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Category>)]
    pub category: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "villa")]
    pub listing_type: Option<String>,
    /// A number, or a numeric string as sent by form-based clients
    #[schema(value_type = Option<f64>, example = 100000.0)]
    pub price: Option<PriceInput>,
    #[schema(value_type = Option<Region>)]
    pub region: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub images: Vec<MediaAsset>,
    #[serde(default)]
    pub videos: Vec<MediaAsset>,
    #[serde(default)]
    pub features: BTreeMap<String, String>,
}

/// Accepts `100000` and `"100000"` alike.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    fn to_number(&self) -> Result<f64, String> {
        match self {
            PriceInput::Number(n) => Ok(*n),
            PriceInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| "price must be a non-negative number".to_string()),
        }
    }
}

impl TryFrom<CreateListingRequest> for ListingDraft {
    type Error = String;

    fn try_from(req: CreateListingRequest) -> Result<Self, Self::Error> {
        let price = req.price.as_ref().map(PriceInput::to_number).transpose()?;

        Ok(ListingDraft {
            title: req.title,
            description: req.description,
            category: req.category,
            listing_type: req.listing_type,
            price,
            region: req.region,
            location: req.location,
            images: req.images,
            videos: req.videos,
            features: req.features,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateListingResponse {
    #[schema(example = "Listing created successfully. It will be visible after admin approval.")]
    pub message: String,
    pub listing: ListingView,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a listing
///
/// The listing stays hidden from the public browse until an admin approves it.
#[utoipa::path(
    post,
    path = "/api/listings",
    tag = "listings",
    security(("bearer_auth" = [])),
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing stored, pending approval", body = CreateListingResponse),
        (status = 400, description = "Missing or invalid field", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 500, description = "Store error", body = ApiError),
    )
)]
#[post("/api/listings")]
pub async fn create_listing_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateListingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match ListingDraft::try_from(req.into_inner()) {
        Ok(draft) => draft,
        Err(msg) => {
            warn!(user_id = %user.user_id, reason = %msg, "Listing rejected by validation");
            return ApiResponse::validation_error(&msg);
        }
    };

    match data.listing.create.execute(user.user_id, draft).await {
        Ok(listing) => {
            info!(listing_id = %listing.id, user_id = %user.user_id, "Listing created");
            ApiResponse::created(CreateListingResponse {
                message: "Listing created successfully. It will be visible after admin approval."
                    .to_string(),
                listing,
            })
        }

        Err(CreateListingError::Validation(msg)) => {
            warn!(user_id = %user.user_id, reason = %msg, "Listing rejected by validation");
            ApiResponse::validation_error(&msg)
        }

        Err(CreateListingError::CreatorNotFound) => {
            warn!(user_id = %user.user_id, "Listing creator no longer exists");
            ApiResponse::unauthorized("INVALID_TOKEN", "User no longer exists")
        }

        Err(CreateListingError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to create listing");
            ApiResponse::store_error("Error creating listing", &msg)
        }
    }
}
