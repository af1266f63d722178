//! Credential hashing.
//!
//! TRADE-OFFS
//! ==========
//! Argon2id with per-hash random salts; verification treats an unparseable
//! stored hash as a mismatch rather than an error, so a corrupted row can
//! never let a login through.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Hash a plaintext password for storage.
///
/// # Errors
///
/// Returns an error if the underlying hasher fails.
pub fn hash_password(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default().hash_password(plain.as_bytes(), &salt)?.to_string())
}

/// Verify a plaintext password against a stored hash.
#[must_use]
pub fn verify_password(plain: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

/// Policy check applied on account creation and password change.
pub fn validate_new_password(plain: &str) -> Result<(), &'static str> {
    if plain.len() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 6 characters");
    }
    Ok(())
}
