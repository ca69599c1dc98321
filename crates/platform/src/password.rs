//! Password Hashing and Verification
//!
//! Argon2id hashing behind two free functions. Callers treat this module as
//! an opaque credential verifier: hash on import, verify on login.
//! Comparison against the stored hash happens inside `argon2`, which is
//! constant-time with respect to the password bytes.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use thiserror::Error;

/// Hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// Returns the PHC string (`$argon2id$...`) for storage.
pub fn hash_password(plain: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// Returns `Ok(false)` for a well-formed hash that does not match; an
/// unparseable stored hash is an error, not a mismatch.
pub fn verify_password(plain: &str, stored_hash: &str) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_password("secret-one").unwrap();
        assert!(!verify_password("secret-two", &hash).unwrap());
    }

    #[test]
    fn test_salting_makes_hashes_unique() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }
}
