use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Hashes a plaintext password with a fresh salt.
///
/// Two calls with the same input produce different stored values; both
/// verify against the original plaintext.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Checks a plaintext password against a stored hash.
///
/// A malformed or corrupt stored hash counts as a failed verification
/// rather than an error.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    verify(plaintext, stored_hash).unwrap_or(false)
}
