use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Vehicle,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::House => "house",
            Category::Vehicle => "vehicle",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "house" => Ok(Category::House),
            "vehicle" => Ok(Category::Vehicle),
            other => Err(format!("Invalid category: {other}")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Pending,
    Sold,
    Rejected,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
            ListingStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(ListingStatus::Active),
            "pending" => Ok(ListingStatus::Pending),
            "sold" => Ok(ListingStatus::Sold),
            "rejected" => Ok(ListingStatus::Rejected),
            other => Err(format!("Invalid status: {other}")),
        }
    }
}

/// Uploaded image or video reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaAsset {
    #[schema(example = "https://cdn.example.com/listings/house-1.jpg")]
    pub url: String,
    #[schema(example = "house-1.jpg")]
    pub filename: String,
}

/// Creator contact details copied onto the listing when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Stored listing row.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: Uuid,
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
    pub status: ListingStatus,
    pub created_by: Uuid,
    pub approved_by_admin: bool,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    pub fn is_publicly_visible(&self) -> bool {
        self.status == ListingStatus::Active && self.approved_by_admin
    }

    /// Hidden listings are only shown to their creator and to admins.
    pub fn visible_to(&self, viewer: Option<&Viewer>) -> bool {
        if self.is_publicly_visible() {
            return true;
        }
        match viewer {
            Some(v) => v.is_admin || v.user_id == self.created_by,
            None => false,
        }
    }
}

/// Caller identity as far as listing visibility is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// Public creator fields joined onto every listing response.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CreatorSummary {
    pub id: Uuid,
    #[schema(example = "Abebe Kebede")]
    pub name: String,
    #[schema(example = "+251911000000")]
    pub phone: String,
    pub region: Option<Region>,
}

impl CreatorSummary {
    /// Placeholder for a creator row that could not be loaded.
    pub fn missing(id: Uuid) -> Self {
        Self {
            id,
            name: String::new(),
            phone: String::new(),
            region: None,
        }
    }
}

/// Listing as returned to clients, creator joined.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub id: Uuid,
    #[schema(example = "Three bedroom villa in Bole")]
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    #[schema(example = "villa")]
    pub listing_type: String,
    #[schema(example = 100000.0)]
    pub price: f64,
    pub region: Region,
    pub location: String,
    pub images: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
    pub features: BTreeMap<String, String>,
    pub contact_info: ContactInfo,
    pub status: ListingStatus,
    pub created_by: CreatorSummary,
    pub approved_by_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListingView {
    pub fn new(listing: Listing, creator: CreatorSummary) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            category: listing.category,
            listing_type: listing.listing_type,
            price: listing.price,
            region: listing.region,
            location: listing.location,
            images: listing.images,
            videos: listing.videos,
            features: listing.features,
            contact_info: listing.contact_info,
            status: listing.status,
            created_by: creator,
            approved_by_admin: listing.approved_by_admin,
            admin_notes: listing.admin_notes,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(status: ListingStatus, approved: bool) -> Listing {
        let now = Utc::now();
        Listing {
            id: Uuid::new_v4(),
            title: "Villa".to_string(),
            description: "Four rooms".to_string(),
            category: Category::House,
            listing_type: "villa".to_string(),
            price: 100_000.0,
            region: Region::AddisAbaba,
            location: "Bole".to_string(),
            images: vec![],
            videos: vec![],
            features: BTreeMap::new(),
            contact_info: ContactInfo {
                name: "Abebe".to_string(),
                phone: "0911000000".to_string(),
                email: "abebe@example.com".to_string(),
            },
            status,
            created_by: Uuid::new_v4(),
            approved_by_admin: approved,
            admin_notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn only_active_and_approved_is_public() {
        let cases = [
            (ListingStatus::Active, true, true),
            (ListingStatus::Active, false, false),
            (ListingStatus::Pending, true, false),
            (ListingStatus::Sold, true, false),
            (ListingStatus::Rejected, false, false),
        ];

        for (status, approved, expected) in cases {
            assert_eq!(
                listing(status, approved).is_publicly_visible(),
                expected,
                "{status:?} approved={approved}"
            );
        }
    }

    #[test]
    fn hidden_listing_visible_to_owner_and_admin_only() {
        let l = listing(ListingStatus::Active, false);
        let owner = Viewer {
            user_id: l.created_by,
            is_admin: false,
        };
        let admin = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: true,
        };
        let stranger = Viewer {
            user_id: Uuid::new_v4(),
            is_admin: false,
        };

        assert!(l.visible_to(Some(&owner)));
        assert!(l.visible_to(Some(&admin)));
        assert!(!l.visible_to(Some(&stranger)));
        assert!(!l.visible_to(None));
    }

    #[test]
    fn view_uses_type_key_and_nested_creator() {
        let l = listing(ListingStatus::Active, true);
        let creator = CreatorSummary {
            id: l.created_by,
            name: "Abebe".to_string(),
            phone: "0911000000".to_string(),
            region: Some(Region::Amhara),
        };

        let json = serde_json::to_value(ListingView::new(l, creator)).unwrap();
        assert_eq!(json["type"], "villa");
        assert_eq!(json["category"], "house");
        assert_eq!(json["approvedByAdmin"], true);
        assert_eq!(json["createdBy"]["name"], "Abebe");
        assert_eq!(json["contactInfo"]["email"], "abebe@example.com");
        assert!(json.get("adminNotes").is_none());
    }

    #[test]
    fn enums_reject_unknown_values() {
        assert_eq!("vehicle".parse::<Category>(), Ok(Category::Vehicle));
        assert!("boat".parse::<Category>().is_err());
        assert_eq!("sold".parse::<ListingStatus>(), Ok(ListingStatus::Sold));
        assert!("archived".parse::<ListingStatus>().is_err());
    }
}
