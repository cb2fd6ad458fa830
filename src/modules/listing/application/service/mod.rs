mod creators;

pub mod create_listing_service;
pub mod get_listing_service;
pub mod list_listings_service;
pub mod list_my_listings_service;
pub mod moderation_queue_service;
pub mod review_listing_service;

pub use create_listing_service::CreateListingService;
pub use get_listing_service::GetListingService;
pub use list_listings_service::ListListingsService;
pub use list_my_listings_service::ListMyListingsService;
pub use moderation_queue_service::ModerationQueueService;
pub use review_listing_service::ReviewListingService;
