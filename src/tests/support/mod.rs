pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory;
pub mod stubs;

pub use in_memory::InMemoryStore;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::{Language, Role, User};
use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::modules::listing::application::domain::entities::{
    Category, ContactInfo, CreatorSummary, Listing, ListingStatus, ListingView, MediaAsset,
};
use crate::modules::message::application::domain::entities::Message;
use crate::shared::domain::Region;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only".to_string(),
        issuer: "marketplace-test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// Reversible stand-in for argon2 so service tests stay fast.
pub struct PlainHasher;

impl PlainHasher {
    pub fn expected(password: &str) -> String {
        format!("plain${password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::expected(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(Self::expected(password) == hash)
    }
}

pub fn sample_user(role: Role) -> User {
    let id = Uuid::new_v4();
    let now = Utc::now();
    User {
        id,
        name: "Abebe Kebede".to_string(),
        email: format!("user-{}@example.com", id.simple()),
        phone: "0911000000".to_string(),
        password_hash: PlainHasher::expected("secret1"),
        region: Region::AddisAbaba,
        language: Language::default(),
        role,
        is_verified: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_listing(owner: Uuid, status: ListingStatus, approved: bool) -> Listing {
    let now = Utc::now();
    Listing {
        id: Uuid::new_v4(),
        title: "Three bedroom villa in Bole".to_string(),
        description: "Quiet compound, close to the airport".to_string(),
        category: Category::House,
        listing_type: "villa".to_string(),
        price: 100_000.0,
        region: Region::AddisAbaba,
        location: "Bole".to_string(),
        images: vec![MediaAsset {
            url: "https://cdn.example.com/villa.jpg".to_string(),
            filename: "villa.jpg".to_string(),
        }],
        videos: vec![],
        features: BTreeMap::from([("bedrooms".to_string(), "3".to_string())]),
        contact_info: ContactInfo {
            name: "Abebe Kebede".to_string(),
            phone: "0911000000".to_string(),
            email: "abebe@example.com".to_string(),
        },
        status,
        created_by: owner,
        approved_by_admin: approved,
        admin_notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_listing_view() -> ListingView {
    let owner = Uuid::new_v4();
    ListingView::new(
        sample_listing(owner, ListingStatus::Active, true),
        CreatorSummary {
            id: owner,
            name: "Abebe Kebede".to_string(),
            phone: "0911000000".to_string(),
            region: Some(Region::AddisAbaba),
        },
    )
}

/// Unread message created `minutes_ago` minutes in the past.
pub fn sample_message(listing_id: Uuid, from_user: Uuid, minutes_ago: i64) -> Message {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    Message {
        id: Uuid::new_v4(),
        listing_id,
        from_user,
        to_admin: true,
        body: "Is the price negotiable?".to_string(),
        read: false,
        created_at: at,
        updated_at: at,
    }
}
