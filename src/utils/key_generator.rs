//! API key generation.

use base64::Engine as _;

/// Random bytes drawn for one key.
const KEY_LENGTH_BYTES: usize = 32;

/// Generates a random API key from the operating system RNG.
///
/// The key is URL-safe base64 without padding, 43 characters long, so it can
/// be pasted into a `Bearer` header or an environment file as-is.
///
/// # Errors
///
/// Returns an error if the system random number generator is unavailable.
pub fn generate_api_key() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; KEY_LENGTH_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
