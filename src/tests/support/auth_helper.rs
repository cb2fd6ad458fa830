use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use super::test_jwt_service;
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{TokenProvider, TokenSubject};

/// `Authorization` header carrying a fresh access token for the given identity.
pub fn bearer(user_id: Uuid, role: Role) -> (&'static str, String) {
    let token = test_jwt_service()
        .generate_access_token(TokenSubject {
            user_id,
            role,
            is_verified: false,
        })
        .expect("test token");
    ("Authorization", format!("Bearer {token}"))
}

/// Token provider app data the auth extractors read.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(test_jwt_service()) as Arc<dyn TokenProvider + Send + Sync>)
}
