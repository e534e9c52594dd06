/*
 * Responsibility
 * - API key -> stable fingerprint: base64url(SHA-256(key)), no padding
 * - Used for log correlation; the raw key never goes to logs or responses
 */
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

pub fn key_fingerprint(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(key.as_bytes()))
}
