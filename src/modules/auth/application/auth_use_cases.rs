use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, FetchProfileUseCase, LoginUserUseCase, RefreshTokenUseCase,
    RegisterUserUseCase, UpdateProfileUseCase, VerifyUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub verify_user: Arc<dyn VerifyUserUseCase + Send + Sync>,
}
