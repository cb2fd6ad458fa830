use async_trait::async_trait;
use std::fmt;

use crate::modules::listing::application::domain::entities::{Category, ListingView};
use crate::modules::listing::application::ports::outgoing::ListingFilter;
use crate::shared::domain::{PageRequest, PageResult, Region};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Raw browse parameters as they arrive on the query string. Blank values
/// count as absent.
#[derive(Debug, Clone, Default)]
pub struct ListListingsInput {
    pub category: Option<String>,
    pub region: Option<String>,
    pub listing_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl ListListingsInput {
    pub fn validate(self) -> Result<(ListingFilter, PageRequest), ListListingsError> {
        let category = non_blank(self.category)
            .map(|c| c.parse::<Category>())
            .transpose()
            .map_err(ListListingsError::Validation)?;

        let region = non_blank(self.region)
            .map(|r| r.parse::<Region>())
            .transpose()
            .map_err(|e| ListListingsError::Validation(e.to_string()))?;

        let filter = ListingFilter {
            category,
            region,
            listing_type: non_blank(self.listing_type),
            min_price: parse_price("minPrice", self.min_price)?,
            max_price: parse_price("maxPrice", self.max_price)?,
        };

        Ok((filter, PageRequest::new(self.page, self.limit)))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_price(field: &str, raw: Option<String>) -> Result<Option<f64>, ListListingsError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ListListingsError::Validation(format!(
            "{field} must be a number"
        ))),
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum ListListingsError {
    Validation(String),
    QueryFailed(String),
}

impl fmt::Display for ListListingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListListingsError::Validation(msg) => write!(f, "{}", msg),
            ListListingsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListListingsUseCase: Send + Sync {
    /// Public browse. Only active, approved listings are ever returned.
    async fn execute(
        &self,
        input: ListListingsInput,
    ) -> Result<PageResult<ListingView>, ListListingsError>;
}
