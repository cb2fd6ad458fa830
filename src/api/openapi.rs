use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    ChangePasswordRequest, ChangePasswordResponse, LoginRequestDto, LoginResponse,
    RefreshTokenRequestDto, RefreshTokenResponseBody, RegisterUserRequest, RegisterUserResponse,
    UpdateProfileRequest, UpdateProfileResponse, VerifyUserResponse,
};
use crate::modules::auth::application::domain::entities::{Language, Role, UserProfile};
use crate::modules::listing::adapter::incoming::web::routes::{
    CreateListingRequest, CreateListingResponse, ListingPageResponse, ReviewListingRequest,
    ReviewListingResponse,
};
use crate::modules::listing::application::domain::entities::{
    Category, ContactInfo, CreatorSummary, ListingStatus, ListingView, MediaAsset,
};
use crate::modules::message::adapter::incoming::web::routes::{
    InboxPageResponse, MessageDataResponse, MyMessagesResponse, SendMessageRequest,
};
use crate::modules::message::application::domain::entities::{
    InboxMessage, Message, SenderSummary,
};
use crate::shared::api::ApiError;
use crate::shared::domain::Region;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace API",
        version = "1.0.0",
        description = "Classifieds marketplace: houses and vehicles, admin moderation, user-to-admin messages",
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::get_me_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::change_password_handler,

        // Listings
        crate::modules::listing::adapter::incoming::web::routes::list_listings_handler,
        crate::modules::listing::adapter::incoming::web::routes::get_my_listings_handler,
        crate::modules::listing::adapter::incoming::web::routes::get_listing_handler,
        crate::modules::listing::adapter::incoming::web::routes::create_listing_handler,

        // Messages
        crate::modules::message::adapter::incoming::web::routes::send_message_handler,
        crate::modules::message::adapter::incoming::web::routes::get_my_messages_handler,

        // Admin
        crate::modules::listing::adapter::incoming::web::routes::approve_listing_handler,
        crate::modules::listing::adapter::incoming::web::routes::reject_listing_handler,
        crate::modules::listing::adapter::incoming::web::routes::get_moderation_queue_handler,
        crate::modules::message::adapter::incoming::web::routes::get_inbox_handler,
        crate::modules::message::adapter::incoming::web::routes::mark_message_read_handler,
        crate::modules::auth::adapter::incoming::web::routes::verify_user_handler,
    ),
    components(
        schemas(
            ApiError,

            // Auth
            RegisterUserRequest,
            RegisterUserResponse,
            LoginRequestDto,
            LoginResponse,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            UpdateProfileRequest,
            UpdateProfileResponse,
            ChangePasswordRequest,
            ChangePasswordResponse,
            VerifyUserResponse,
            UserProfile,
            Role,
            Language,
            Region,

            // Listings
            ListingView,
            CreatorSummary,
            ContactInfo,
            MediaAsset,
            Category,
            ListingStatus,
            ListingPageResponse,
            CreateListingRequest,
            CreateListingResponse,
            ReviewListingRequest,
            ReviewListingResponse,

            // Messages
            Message,
            InboxMessage,
            SenderSummary,
            SendMessageRequest,
            MessageDataResponse,
            MyMessagesResponse,
            InboxPageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and profile"),
        (name = "listings", description = "Public browse and listing creation"),
        (name = "messages", description = "User messages to the admins"),
        (name = "admin", description = "Moderation, inbox and user verification"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
