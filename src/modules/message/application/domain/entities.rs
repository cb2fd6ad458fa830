use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

/// A user's note to the admins about one listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    #[serde(rename = "listing")]
    pub listing_id: Uuid,
    pub from_user: Uuid,
    pub to_admin: bool,
    #[serde(rename = "message")]
    #[schema(example = "Is the price negotiable?")]
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sender fields shown in the admin inbox.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SenderSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl SenderSummary {
    pub fn missing(id: Uuid) -> Self {
        Self {
            id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl From<User> for SenderSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}

/// Inbox row: the message with its sender joined.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxMessage {
    pub id: Uuid,
    #[serde(rename = "listing")]
    pub listing_id: Uuid,
    pub from_user: SenderSummary,
    pub to_admin: bool,
    #[serde(rename = "message")]
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InboxMessage {
    pub fn new(message: Message, sender: SenderSummary) -> Self {
        Self {
            id: message.id,
            listing_id: message.listing_id,
            from_user: sender,
            to_admin: message.to_admin,
            body: message.body,
            read: message.read,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}
