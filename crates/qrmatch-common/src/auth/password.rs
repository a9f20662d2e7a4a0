//! Password hashing and verification utilities
//!
//! Uses Argon2id with a random per-password salt.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash
///
/// # Errors
/// Returns an error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Hash checked when a login names no account, so both failure paths cost one verify
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("qrmatch-unknown-account").ok());

/// Run a full verify against a throwaway hash. Always `false`.
pub fn verify_dummy_password(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "correct horse battery";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2id"));
        // Fresh salt every time
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("password123").unwrap();

        assert!(verify_password("password123", &hash).unwrap());
        assert!(!verify_password("password124", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("password123", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_dummy_verify_never_matches() {
        assert!(!verify_dummy_password("qrmatch-unknown-account"));
        assert!(!verify_dummy_password("password123"));
        assert!(DUMMY_HASH.as_deref().is_some_and(|h| h.starts_with("$argon2id")));
    }
}
