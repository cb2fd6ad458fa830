pub mod listing_query;
pub mod listing_repository;

pub use listing_query::{ListingFilter, ListingQuery, ListingQueryError, ListingScope};
pub use listing_repository::{
    ListingRepository, ListingRepositoryError, ModerationUpdate, NewListing,
};
