use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::{AuthSession, Language};
use crate::shared::domain::Region;

pub const MIN_PASSWORD_LENGTH: usize = 6;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Raw registration fields as received over the wire.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub region: String,
    pub language: Option<String>,
}

/// Registration fields that passed validation. The email is trimmed and lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub region: Region,
    pub language: Language,
}

impl RegisterUserInput {
    pub fn validate(self) -> Result<ValidRegistration, RegisterUserError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterUserError::Validation("Name is required".into()));
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterUserError::Validation("Email is required".into()));
        }
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::Validation("Invalid email format".into()));
        }

        let phone = self.phone.trim().to_string();
        if phone.is_empty() {
            return Err(RegisterUserError::Validation("Phone is required".into()));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let region = self
            .region
            .parse::<Region>()
            .map_err(|e| RegisterUserError::Validation(e.to_string()))?;

        let language = match self.language.as_deref() {
            None => Language::default(),
            Some(raw) => raw.parse::<Language>().map_err(RegisterUserError::Validation)?,
        };

        Ok(ValidRegistration {
            name,
            email,
            phone,
            password: self.password,
            region,
            language,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterUserError {
    Validation(String),
    EmailAlreadyExists,
    HashingFailed(String),
    TokenFailed(String),
    RepositoryError(String),
}

impl fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterUserError::Validation(msg) => write!(f, "{}", msg),
            RegisterUserError::EmailAlreadyExists => write!(f, "User already exists"),
            RegisterUserError::HashingFailed(msg) => write!(f, "hashing failed: {}", msg),
            RegisterUserError::TokenFailed(msg) => write!(f, "token generation failed: {}", msg),
            RegisterUserError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError>;
}
