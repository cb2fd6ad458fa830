use std::sync::Arc;

use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingUseCase, GetListingUseCase, ListListingsUseCase, ListMyListingsUseCase,
    ModerationQueueUseCase, ReviewListingUseCase,
};

#[derive(Clone)]
pub struct ListingUseCases {
    pub list: Arc<dyn ListListingsUseCase + Send + Sync>,
    pub get: Arc<dyn GetListingUseCase + Send + Sync>,
    pub create: Arc<dyn CreateListingUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewListingUseCase + Send + Sync>,
    pub mine: Arc<dyn ListMyListingsUseCase + Send + Sync>,
    pub moderation_queue: Arc<dyn ModerationQueueUseCase + Send + Sync>,
}
