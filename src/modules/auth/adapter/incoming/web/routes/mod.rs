mod change_password;
mod get_me;
mod login_user;
mod refresh_token;
mod register_user;
mod update_profile;
mod verify_user;

pub use change_password::{
    change_password_handler, ChangePasswordRequest, ChangePasswordResponse,
};
pub use get_me::get_me_handler;
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::{register_user_handler, RegisterUserRequest, RegisterUserResponse};
pub use update_profile::{update_profile_handler, UpdateProfileRequest, UpdateProfileResponse};
pub use verify_user::{verify_user_handler, VerifyUserResponse};

// utoipa path structs generated next to each handler
pub use change_password::__path_change_password_handler;
pub use get_me::__path_get_me_handler;
pub use login_user::__path_login_user_handler;
pub use refresh_token::__path_refresh_token_handler;
pub use register_user::__path_register_user_handler;
pub use update_profile::__path_update_profile_handler;
pub use verify_user::__path_verify_user_handler;
