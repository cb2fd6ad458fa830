pub mod argon2_hasher;
pub mod bcrypt_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::{BcryptHasher, DEFAULT_BCRYPT_COST};
