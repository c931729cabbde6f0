//! Argon2id password hashing.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::db::RepositoryError;
use crate::services::ServiceError;

/// Hash a password using Argon2id.
pub(super) fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| ServiceError::PasswordHash)
}

/// Check a password against a stored PHC hash string.
///
/// Returns `Ok(false)` on a mismatch. A hash that cannot be parsed is a
/// corrupted row, not a wrong password.
pub(super) fn verify_password(password: &str, hash: &str) -> Result<bool, ServiceError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid password hash: {e}"))
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(_) => Err(ServiceError::PasswordHash),
    }
}
