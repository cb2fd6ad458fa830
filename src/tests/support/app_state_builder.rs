use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, FetchProfileUseCase, LoginUserUseCase, RefreshTokenUseCase,
    RegisterUserUseCase, UpdateProfileUseCase, VerifyUserUseCase,
};
use crate::modules::auth::application::AuthUseCases;
use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingUseCase, GetListingUseCase, ListListingsUseCase, ListMyListingsUseCase,
    ModerationQueueUseCase, ReviewListingUseCase,
};
use crate::modules::listing::application::ListingUseCases;
use crate::modules::message::application::ports::incoming::use_cases::{
    AdminInboxUseCase, ListMyMessagesUseCase, MarkReadUseCase, SendMessageUseCase,
};
use crate::modules::message::application::MessageUseCases;
use crate::tests::support::stubs::NotUsed;
use crate::AppState;

/// Builds an `AppState` where every use case panics unless replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    listing: ListingUseCases,
    message: MessageUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(NotUsed),
                login: Arc::new(NotUsed),
                refresh: Arc::new(NotUsed),
                fetch_profile: Arc::new(NotUsed),
                update_profile: Arc::new(NotUsed),
                change_password: Arc::new(NotUsed),
                verify_user: Arc::new(NotUsed),
            },
            listing: ListingUseCases {
                list: Arc::new(NotUsed),
                get: Arc::new(NotUsed),
                create: Arc::new(NotUsed),
                review: Arc::new(NotUsed),
                mine: Arc::new(NotUsed),
                moderation_queue: Arc::new(NotUsed),
            },
            message: MessageUseCases {
                send: Arc::new(NotUsed),
                mine: Arc::new(NotUsed),
                inbox: Arc::new(NotUsed),
                mark_read: Arc::new(NotUsed),
            },
        }
    }
}

impl TestAppStateBuilder {
    // auth

    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl FetchProfileUseCase + 'static) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(mut self, uc: impl ChangePasswordUseCase + 'static) -> Self {
        self.auth.change_password = Arc::new(uc);
        self
    }

    pub fn with_verify_user(mut self, uc: impl VerifyUserUseCase + 'static) -> Self {
        self.auth.verify_user = Arc::new(uc);
        self
    }

    // listings

    pub fn with_list_listings(mut self, uc: impl ListListingsUseCase + 'static) -> Self {
        self.listing.list = Arc::new(uc);
        self
    }

    pub fn with_get_listing(mut self, uc: impl GetListingUseCase + 'static) -> Self {
        self.listing.get = Arc::new(uc);
        self
    }

    pub fn with_create_listing(mut self, uc: impl CreateListingUseCase + 'static) -> Self {
        self.listing.create = Arc::new(uc);
        self
    }

    pub fn with_review_listing(mut self, uc: impl ReviewListingUseCase + 'static) -> Self {
        self.listing.review = Arc::new(uc);
        self
    }

    pub fn with_my_listings(mut self, uc: impl ListMyListingsUseCase + 'static) -> Self {
        self.listing.mine = Arc::new(uc);
        self
    }

    pub fn with_moderation_queue(mut self, uc: impl ModerationQueueUseCase + 'static) -> Self {
        self.listing.moderation_queue = Arc::new(uc);
        self
    }

    // messages

    pub fn with_send_message(mut self, uc: impl SendMessageUseCase + 'static) -> Self {
        self.message.send = Arc::new(uc);
        self
    }

    pub fn with_my_messages(mut self, uc: impl ListMyMessagesUseCase + 'static) -> Self {
        self.message.mine = Arc::new(uc);
        self
    }

    pub fn with_inbox(mut self, uc: impl AdminInboxUseCase + 'static) -> Self {
        self.message.inbox = Arc::new(uc);
        self
    }

    pub fn with_mark_read(mut self, uc: impl MarkReadUseCase + 'static) -> Self {
        self.message.mark_read = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            listing: self.listing,
            message: self.message,
        })
    }
}
