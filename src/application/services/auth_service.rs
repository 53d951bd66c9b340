//! Authorization against the shared API key.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed message both sides are MACed over; only the key differs.
const AUTH_CONTEXT: &[u8] = b"url-shortcuts:api-key";

/// Checks presented credentials against the configured API key.
///
/// The key is never compared byte-by-byte. Both the configured key and the
/// presented credential are used as HMAC-SHA256 keys over the same message, and
/// the resulting tags are compared with [`Mac::verify_slice`], which runs in
/// constant time.
pub struct AuthService {
    expected_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a new authorization service for the given API key.
    pub fn new(api_key: &str) -> Self {
        Self {
            expected_tag: Self::keyed_mac(api_key).finalize().into_bytes().to_vec(),
        }
    }

    fn keyed_mac(key: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
        mac.update(AUTH_CONTEXT);
        mac
    }

    /// Authorizes a request carrying `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credential does not match the API key.
    pub fn authenticate(&self, credential: &str) -> Result<(), AppError> {
        Self::keyed_mac(credential)
            .verify_slice(&self.expected_tag)
            .map_err(|_| {
                AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid API key" }))
            })
    }
}
