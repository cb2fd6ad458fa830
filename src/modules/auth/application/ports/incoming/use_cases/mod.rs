mod change_password;
mod fetch_profile;
mod login_user;
mod refresh_token;
mod register_user;
mod update_profile;
mod verify_user;

pub use change_password::{ChangePasswordError, ChangePasswordInput, ChangePasswordUseCase};
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use login_user::{LoginUserError, LoginUserInput, LoginUserUseCase};
pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase};
pub use register_user::{
    RegisterUserError, RegisterUserInput, RegisterUserUseCase, ValidRegistration,
    MIN_PASSWORD_LENGTH,
};
pub use update_profile::{UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase};
pub use verify_user::{VerifyUserError, VerifyUserUseCase};
