pub mod create_listing;
pub mod get_listing;
pub mod list_listings;
pub mod list_my_listings;
pub mod moderation_queue;
pub mod review_listing;

pub use create_listing::{CreateListingError, CreateListingUseCase, ListingDraft, ValidListingDraft};
pub use get_listing::{GetListingError, GetListingUseCase};
pub use list_listings::{ListListingsError, ListListingsInput, ListListingsUseCase};
pub use list_my_listings::{ListMyListingsError, ListMyListingsUseCase};
pub use moderation_queue::{ModerationQueueError, ModerationQueueInput, ModerationQueueUseCase};
pub use review_listing::{ReviewDecision, ReviewListingError, ReviewListingUseCase};
