mod create_listing;
mod get_listing;
mod get_moderation_queue;
mod get_my_listings;
mod list_listings;
mod review_listing;

pub use create_listing::{create_listing_handler, CreateListingRequest, CreateListingResponse};
pub use get_listing::get_listing_handler;
pub use get_moderation_queue::{get_moderation_queue_handler, ModerationQueueQuery};
pub use get_my_listings::{get_my_listings_handler, PageQuery};
pub use list_listings::{list_listings_handler, ListListingsQuery, ListingPageResponse};
pub use review_listing::{
    approve_listing_handler, reject_listing_handler, ReviewListingRequest, ReviewListingResponse,
};

pub use create_listing::__path_create_listing_handler;
pub use get_listing::__path_get_listing_handler;
pub use get_moderation_queue::__path_get_moderation_queue_handler;
pub use get_my_listings::__path_get_my_listings_handler;
pub use list_listings::__path_list_listings_handler;
pub use review_listing::{__path_approve_listing_handler, __path_reject_listing_handler};
