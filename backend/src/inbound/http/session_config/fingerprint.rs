//! Truncated SHA-256 fingerprint of the session signing key, logged at
//! start-up so operators can confirm which key is active.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of the SHA-256 of the key's signing half, as lowercase hex.
///
/// # Examples
///
/// ```rust
/// use actix_web::cookie::Key;
/// use bookstore::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let key = Key::generate();
/// let fp = key_fingerprint(&key);
///
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
}
