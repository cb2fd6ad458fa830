use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Administrative regions a user or listing can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    AddisAbaba,
    Tigray,
    Amhara,
    Oromia,
    Harari,
    Gambella,
    Benishangul,
    Afar,
    Somali,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl Region {
    pub const ALL: [Region; 9] = [
        Region::AddisAbaba,
        Region::Tigray,
        Region::Amhara,
        Region::Oromia,
        Region::Harari,
        Region::Gambella,
        Region::Benishangul,
        Region::Afar,
        Region::Somali,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::AddisAbaba => "addis_ababa",
            Region::Tigray => "tigray",
            Region::Amhara => "amhara",
            Region::Oromia => "oromia",
            Region::Harari => "harari",
            Region::Gambella => "gambella",
            Region::Benishangul => "benishangul",
            Region::Afar => "afar",
            Region::Somali => "somali",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == needle)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
