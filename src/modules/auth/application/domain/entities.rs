use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::domain::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Amharic,
    Tigrinya,
    Oromo,
    Sidamo,
    Harari,
    Somali,
    Afar,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Amharic,
        Language::Tigrinya,
        Language::Oromo,
        Language::Sidamo,
        Language::Harari,
        Language::Somali,
        Language::Afar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Amharic => "amharic",
            Language::Tigrinya => "tigrinya",
            Language::Oromo => "oromo",
            Language::Sidamo => "sidamo",
            Language::Harari => "harari",
            Language::Somali => "somali",
            Language::Afar => "afar",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == needle)
            .ok_or_else(|| format!("unknown language: {s}"))
    }
}

/// Stored user record, password hash included. Never serialized to clients.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub region: Region,
    pub language: Language,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    #[schema(example = "Abebe Kebede")]
    pub name: String,
    #[schema(example = "abebe@example.com")]
    pub email: String,
    #[schema(example = "+251911000000")]
    pub phone: String,
    pub region: Region,
    pub language: Language,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            region: user.region,
            language: user.language,
            role: user.role,
            is_verified: user.is_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Tokens handed out after registration or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
}
