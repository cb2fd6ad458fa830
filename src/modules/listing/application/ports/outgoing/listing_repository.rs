use async_trait::async_trait;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::{
    Category, ContactInfo, Listing, ListingStatus, MediaAsset,
};
use crate::shared::domain::Region;

/// Validated listing ready to insert. Status and approval are not part of
/// it: every new row starts `active` and unapproved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
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
    pub contact_info: ContactInfo,
    pub created_by: Uuid,
}

/// Admin decision applied in one `UPDATE ... RETURNING`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationUpdate {
    pub approved_by_admin: bool,
    pub status: ListingStatus,
    /// Overwrites the stored notes. `None` clears them.
    pub admin_notes: Option<String>,
}

impl ModerationUpdate {
    pub fn approve(notes: Option<String>) -> Self {
        Self {
            approved_by_admin: true,
            status: ListingStatus::Active,
            admin_notes: notes,
        }
    }

    pub fn reject(notes: Option<String>) -> Self {
        Self {
            approved_by_admin: false,
            status: ListingStatus::Rejected,
            admin_notes: notes,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListingRepositoryError {
    #[error("Listing not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt listing record: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn create_listing(&self, listing: NewListing) -> Result<Listing, ListingRepositoryError>;

    async fn moderate(
        &self,
        listing_id: Uuid,
        update: ModerationUpdate,
    ) -> Result<Listing, ListingRepositoryError>;
}
