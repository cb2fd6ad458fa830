use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{AuthSession, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordError, ChangePasswordInput, ChangePasswordUseCase, FetchProfileError,
    FetchProfileUseCase, LoginUserError, LoginUserInput, LoginUserUseCase, RefreshTokenError,
    RefreshTokenUseCase, RegisterUserError, RegisterUserInput, RegisterUserUseCase,
    UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase, VerifyUserError,
    VerifyUserUseCase,
};
use crate::modules::listing::application::domain::entities::{ListingView, Viewer};
use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingError, CreateListingUseCase, GetListingError, GetListingUseCase,
    ListListingsError, ListListingsInput, ListListingsUseCase, ListMyListingsError,
    ListMyListingsUseCase, ListingDraft, ModerationQueueError, ModerationQueueInput,
    ModerationQueueUseCase, ReviewDecision, ReviewListingError, ReviewListingUseCase,
};
use crate::modules::message::application::domain::entities::{InboxMessage, Message};
use crate::modules::message::application::ports::incoming::use_cases::{
    AdminInboxError, AdminInboxUseCase, InboxInput, ListMyMessagesError, ListMyMessagesUseCase,
    MarkReadError, MarkReadUseCase, SendMessageError, SendMessageInput, SendMessageUseCase,
};
use crate::shared::domain::{PageRequest, PageResult};

/// Default for every use case slot a test does not override.
#[derive(Default, Clone, Copy)]
pub struct NotUsed;

const NOT_USED: &str = "Not used in this test";

// ─── auth ────────────────────────────────────────────────

#[async_trait]
impl RegisterUserUseCase for NotUsed {
    async fn execute(&self, _input: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl LoginUserUseCase for NotUsed {
    async fn execute(&self, _input: LoginUserInput) -> Result<AuthSession, LoginUserError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl RefreshTokenUseCase for NotUsed {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl FetchProfileUseCase for NotUsed {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateProfileUseCase for NotUsed {
    async fn execute(
        &self,
        _user_id: Uuid,
        _input: UpdateProfileInput,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ChangePasswordUseCase for NotUsed {
    async fn execute(
        &self,
        _user_id: Uuid,
        _input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl VerifyUserUseCase for NotUsed {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, VerifyUserError> {
        unimplemented!("{NOT_USED}")
    }
}

// ─── listings ────────────────────────────────────────────

#[async_trait]
impl ListListingsUseCase for NotUsed {
    async fn execute(
        &self,
        _input: ListListingsInput,
    ) -> Result<PageResult<ListingView>, ListListingsError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetListingUseCase for NotUsed {
    async fn execute(
        &self,
        _listing_id: Uuid,
        _viewer: Option<Viewer>,
    ) -> Result<ListingView, GetListingError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateListingUseCase for NotUsed {
    async fn execute(
        &self,
        _creator_id: Uuid,
        _draft: ListingDraft,
    ) -> Result<ListingView, CreateListingError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ReviewListingUseCase for NotUsed {
    async fn execute(
        &self,
        _listing_id: Uuid,
        _decision: ReviewDecision,
        _notes: Option<String>,
    ) -> Result<ListingView, ReviewListingError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListMyListingsUseCase for NotUsed {
    async fn execute(
        &self,
        _owner: Uuid,
        _page: PageRequest,
    ) -> Result<PageResult<ListingView>, ListMyListingsError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ModerationQueueUseCase for NotUsed {
    async fn execute(
        &self,
        _input: ModerationQueueInput,
    ) -> Result<PageResult<ListingView>, ModerationQueueError> {
        unimplemented!("{NOT_USED}")
    }
}

// ─── messages ────────────────────────────────────────────

#[async_trait]
impl SendMessageUseCase for NotUsed {
    async fn execute(
        &self,
        _sender: Uuid,
        _input: SendMessageInput,
    ) -> Result<Message, SendMessageError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl ListMyMessagesUseCase for NotUsed {
    async fn execute(&self, _sender: Uuid) -> Result<Vec<Message>, ListMyMessagesError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl AdminInboxUseCase for NotUsed {
    async fn execute(
        &self,
        _input: InboxInput,
    ) -> Result<PageResult<InboxMessage>, AdminInboxError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl MarkReadUseCase for NotUsed {
    async fn execute(&self, _message_id: Uuid) -> Result<Message, MarkReadError> {
        unimplemented!("{NOT_USED}")
    }
}
