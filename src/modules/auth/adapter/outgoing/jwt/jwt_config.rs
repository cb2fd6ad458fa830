use anyhow::{bail, Context};
use std::env;

const ONE_DAY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: i64) -> anyhow::Result<i64> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid {} value '{}'", key, raw)),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables.
    /// Expects the dotenv file to have been loaded by `AppConfig::from_env`.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            bail!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", ONE_DAY)?;
        let refresh_token_expiry = Self::parse_expiry("JWT_REFRESH_EXPIRY", 7 * ONE_DAY)?;

        if access_token_expiry <= 0 {
            bail!("JWT_ACCESS_EXPIRY must be a positive number of seconds");
        }

        if refresh_token_expiry <= access_token_expiry {
            bail!("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "marketplace".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
