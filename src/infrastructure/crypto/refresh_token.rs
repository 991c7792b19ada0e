//! Opaque refresh tokens
//!
//! The client receives `prk_<hex>`; only its SHA-256 digest is persisted.

use rand::Rng;
use sha2::{Digest, Sha256};

const REFRESH_TOKEN_PREFIX: &str = "prk_";

/// A freshly minted token and the digest to store for it
#[derive(Debug, Clone)]
pub struct GeneratedRefreshToken {
    /// Shown to the client once
    pub token: String,
    pub token_hash: String,
}

/// Generate 32 random bytes, hex encoded, with a recognisable prefix.
pub fn generate_refresh_token() -> GeneratedRefreshToken {
    let mut rng = rand::thread_rng();
    let random_bytes: [u8; 32] = rng.gen();
    let token = format!("{}{}", REFRESH_TOKEN_PREFIX, hex::encode(random_bytes));
    let token_hash = hash_refresh_token(&token);
    GeneratedRefreshToken { token, token_hash }
}

/// Hash a refresh token for storage using SHA-256
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
