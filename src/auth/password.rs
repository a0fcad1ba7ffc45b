//! Password hashing and verification

use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::warn;

/// One-way salted hash of a password. Fails only on internal error, never
/// on the password's content.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Compares a candidate password against a stored hash.
///
/// A malformed stored hash counts as a mismatch, not an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match verify(password, stored_hash) {
        Ok(matched) => matched,
        Err(e) => {
            warn!(error = %e, "stored password hash could not be checked");
            false
        }
    }
}
