use anyhow::{bail, Context};
use std::env;
use std::str::FromStr;

const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Bcrypt,
    Argon2,
}

impl FromStr for HasherKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bcrypt" => Ok(HasherKind::Bcrypt),
            "argon2" => Ok(HasherKind::Argon2),
            other => bail!("PASSWORD_HASHER must be 'bcrypt' or 'argon2', got '{other}'"),
        }
    }
}

/// Process configuration read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub json_limit_bytes: usize,
    pub password_hasher: HasherKind,
    pub bcrypt_cost: u32,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_or("PORT", 5000u16)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 20u32)?;
        let db_min_connections = parse_or("DB_MIN_CONNECTIONS", 2u32)?;
        let json_limit_bytes = parse_or("JSON_LIMIT_BYTES", DEFAULT_JSON_LIMIT)?;
        let password_hasher = parse_or("PASSWORD_HASHER", HasherKind::Bcrypt)?;
        let bcrypt_cost = parse_or("BCRYPT_COST", 12u32)?;
        let argon2_memory_kib = parse_or("ARGON2_MEMORY_KIB", 4 * 1024u32)?;
        let argon2_iterations = parse_or("ARGON2_ITERATIONS", 3u32)?;
        let argon2_parallelism = parse_or("ARGON2_PARALLELISM", 1u32)?;
        let run_migrations = parse_or("RUN_MIGRATIONS", false)?;

        if db_min_connections > db_max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31");
        }
        check_argon2(argon2_memory_kib, argon2_iterations, argon2_parallelism)?;

        Ok(Self {
            environment,
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            json_limit_bytes,
            password_hasher,
            bcrypt_cost,
            argon2_memory_kib,
            argon2_iterations,
            argon2_parallelism,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Argon2 needs at least one pass, one lane and 8 KiB of memory per lane.
fn check_argon2(memory_kib: u32, iterations: u32, parallelism: u32) -> anyhow::Result<()> {
    if iterations == 0 {
        bail!("ARGON2_ITERATIONS must be at least 1");
    }
    if parallelism == 0 {
        bail!("ARGON2_PARALLELISM must be at least 1");
    }
    if memory_kib < 8 * parallelism {
        bail!("ARGON2_MEMORY_KIB must be at least 8 per lane");
    }
    Ok(())
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {key} value '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}
