//! Opaque bearer tokens
//!
//! A token is 32 random bytes, base64url-encoded. Only its SHA-256 digest is
//! persisted.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

/// Entropy per issued token
pub const TOKEN_BYTES: usize = 32;

/// Freshly minted token: the plaintext goes to the client, the hash to storage
#[derive(Clone)]
pub struct IssuedToken {
    pub plaintext: String,
    pub hash: String,
}

impl IssuedToken {
    #[must_use]
    pub fn generate() -> Self {
        let plaintext = generate_token();
        let hash = hash_token(&plaintext);
        Self { plaintext, hash }
    }
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("hash", &self.hash)
            .finish_non_exhaustive()
    }
}

/// Generate a new random bearer token
#[must_use]
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Hex SHA-256 of a bearer token, the lookup key in storage
#[must_use]
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
