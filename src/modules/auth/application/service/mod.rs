mod change_password_service;
mod fetch_profile_service;
mod login_user_service;
mod refresh_token_service;
mod register_user_service;
mod session;
mod update_profile_service;
mod verify_user_service;

pub use change_password_service::ChangePasswordService;
pub use fetch_profile_service::FetchProfileService;
pub use login_user_service::LoginUserService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
pub use verify_user_service::VerifyUserService;
