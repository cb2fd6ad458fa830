mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::listing;
pub use modules::message;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::service::{
    ChangePasswordService, FetchProfileService, LoginUserService, RefreshTokenService,
    RegisterUserService, UpdateProfileService, VerifyUserService,
};
use crate::auth::application::AuthUseCases;
use crate::listing::adapter::outgoing::{ListingQueryPostgres, ListingRepositoryPostgres};
use crate::listing::application::service::{
    CreateListingService, GetListingService, ListListingsService, ListMyListingsService,
    ModerationQueueService, ReviewListingService,
};
use crate::listing::application::ListingUseCases;
use crate::message::adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres};
use crate::message::application::service::{
    AdminInboxService, ListMyMessagesService, MarkReadService, SendMessageService,
};
use crate::message::application::MessageUseCases;
use crate::shared::api::json_config::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{AppConfig, HasherKind};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub listing: ListingUseCases,
    pub message: MessageUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let hasher: Arc<dyn PasswordHasher> = match config.password_hasher {
        HasherKind::Bcrypt => Arc::new(BcryptHasher::new(config.bcrypt_cost)),
        HasherKind::Argon2 => Arc::new(
            Argon2Hasher::with_params(
                config.argon2_memory_kib,
                config.argon2_iterations,
                config.argon2_parallelism,
            )
            .context("Invalid ARGON2_* parameters")?,
        ),
    };
    info!(hasher = ?config.password_hasher, environment = %config.environment, "Password hashing configured");
    if config.is_production() && config.password_hasher == HasherKind::Bcrypt && config.bcrypt_cost < 10 {
        warn!(cost = config.bcrypt_cost, "Low BCRYPT_COST in production");
    }

    let jwt_service = JwtTokenService::new(jwt_config);
    let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());

    // Adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let listing_query = ListingQueryPostgres::new(Arc::clone(&db_arc));
    let listing_repo = ListingRepositoryPostgres::new(Arc::clone(&db_arc));
    let message_query = MessageQueryPostgres::new(Arc::clone(&db_arc));
    let message_repo = MessageRepositoryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        refresh: Arc::new(RefreshTokenService::new(
            user_query.clone(),
            Arc::clone(&tokens),
        )),
        fetch_profile: Arc::new(FetchProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher,
        )),
        verify_user: Arc::new(VerifyUserService::new(user_repo)),
    };

    let listing = ListingUseCases {
        list: Arc::new(ListListingsService::new(
            listing_query.clone(),
            user_query.clone(),
        )),
        get: Arc::new(GetListingService::new(
            listing_query.clone(),
            user_query.clone(),
        )),
        create: Arc::new(CreateListingService::new(
            listing_repo.clone(),
            user_query.clone(),
        )),
        review: Arc::new(ReviewListingService::new(listing_repo, user_query.clone())),
        mine: Arc::new(ListMyListingsService::new(
            listing_query.clone(),
            user_query.clone(),
        )),
        moderation_queue: Arc::new(ModerationQueueService::new(
            listing_query,
            user_query.clone(),
        )),
    };

    let message = MessageUseCases {
        send: Arc::new(SendMessageService::new(message_repo.clone())),
        mine: Arc::new(ListMyMessagesService::new(message_query.clone())),
        inbox: Arc::new(AdminInboxService::new(message_query, user_query)),
        mark_read: Arc::new(MarkReadService::new(message_repo)),
    };

    let state = AppState {
        auth,
        listing,
        message,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let json_limit = config.json_limit_bytes;
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config(json_limit))
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// `/api/listings/mine` is registered ahead of `/api/listings/{id}` so the
/// literal segment wins.
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_me_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_user_handler);
    // Listings
    cfg.service(crate::listing::adapter::incoming::web::routes::list_listings_handler);
    cfg.service(crate::listing::adapter::incoming::web::routes::get_my_listings_handler);
    cfg.service(crate::listing::adapter::incoming::web::routes::create_listing_handler);
    cfg.service(crate::listing::adapter::incoming::web::routes::get_listing_handler);
    cfg.service(crate::listing::adapter::incoming::web::routes::approve_listing_handler);
    cfg.service(crate::listing::adapter::incoming::web::routes::reject_listing_handler);
    cfg.service(crate::listing::adapter::incoming::web::routes::get_moderation_queue_handler);
    // Messages
    cfg.service(crate::message::adapter::incoming::web::routes::send_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::get_my_messages_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::get_inbox_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::mark_message_read_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
