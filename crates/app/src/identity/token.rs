//! API token generation and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "till";

/// Generate a fresh opaque API token.
#[must_use]
pub fn generate_api_token() -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}{}",
        Uuid::now_v7().simple(),
        Uuid::now_v7().simple()
    )
}

/// Hash a raw API token for storage and lookup.
///
/// Only the hash is persisted; the raw token is shown once at issue time.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
