use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::{
    Category, ContactInfo, ListingView, MediaAsset,
};
use crate::modules::listing::application::ports::outgoing::NewListing;
use crate::shared::domain::Region;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_TYPE_LENGTH: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Listing fields a client may supply. Ownership, contact snapshot and
/// moderation fields are stamped by the server.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub listing_type: Option<String>,
    pub price: Option<f64>,
    pub region: Option<String>,
    pub location: Option<String>,
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
    pub features: BTreeMap<String, String>,
}

/// Output of [`ListingDraft::validate`], waiting for the creator stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidListingDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub listing_type: String,
    pub price: f64,
    pub region: Region,
    pub location: String,
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
    pub features: BTreeMap<String, String>,
}

impl ValidListingDraft {
    pub fn into_new_listing(self, created_by: Uuid, contact_info: ContactInfo) -> NewListing {
        NewListing {
            title: self.title,
            description: self.description,
            category: self.category,
            listing_type: self.listing_type,
            price: self.price,
            region: self.region,
            location: self.location,
            images: self.images,
            videos: self.videos,
            features: self.features,
            contact_info,
            created_by,
        }
    }
}

impl ListingDraft {
    pub fn validate(self) -> Result<ValidListingDraft, CreateListingError> {
        let title = required("title", self.title)?;
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(CreateListingError::Validation(format!(
                "title must be at most {MAX_TITLE_LENGTH} characters"
            )));
        }

        let description = required("description", self.description)?;

        let category = required("category", self.category)?
            .parse::<Category>()
            .map_err(CreateListingError::Validation)?;

        let listing_type = required("type", self.listing_type)?;
        if listing_type.chars().count() > MAX_TYPE_LENGTH {
            return Err(CreateListingError::Validation(format!(
                "type must be at most {MAX_TYPE_LENGTH} characters"
            )));
        }

        let price = match self.price {
            None => return Err(CreateListingError::Validation("price is required".into())),
            Some(p) if !p.is_finite() || p < 0.0 => {
                return Err(CreateListingError::Validation(
                    "price must be a non-negative number".into(),
                ))
            }
            Some(p) => p,
        };

        let region = required("region", self.region)?
            .parse::<Region>()
            .map_err(|e| CreateListingError::Validation(e.to_string()))?;

        let location = required("location", self.location)?;

        Ok(ValidListingDraft {
            title,
            description,
            category,
            listing_type,
            price,
            region,
            location,
            images: self.images,
            videos: self.videos,
            features: self.features,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, CreateListingError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CreateListingError::Validation(format!("{field} is required")))
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum CreateListingError {
    Validation(String),
    /// The token subject has no user row.
    CreatorNotFound,
    RepositoryError(String),
}

impl fmt::Display for CreateListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateListingError::Validation(msg) => write!(f, "{}", msg),
            CreateListingError::CreatorNotFound => write!(f, "creator not found"),
            CreateListingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateListingUseCase: Send + Sync {
    async fn execute(
        &self,
        creator_id: Uuid,
        draft: ListingDraft,
    ) -> Result<ListingView, CreateListingError>;
}
