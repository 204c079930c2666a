//! Short code and API key generation.

use rand::{Rng, RngCore, distr::Alphanumeric};

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 5;

/// Number of random bytes in an API key (hex-encoded to 32 characters).
const API_KEY_BYTES: usize = 16;

/// Generates a random 5-character short code.
///
/// Codes are drawn uniformly from the 62-symbol alphanumeric alphabet
/// (`A-Z`, `a-z`, `0-9`), giving roughly 916 million combinations.
/// Collisions are rare but possible; callers must treat the store's
/// unique-constraint violation as the collision signal and redraw.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Generates a fresh 128-bit API key as a 32-character lowercase hex string.
///
/// The key space makes collisions effectively impossible; the store's
/// uniqueness constraint still backstops the guarantee.
pub fn generate_api_key() -> String {
    let mut buffer = [0u8; API_KEY_BYTES];
    rand::rng().fill_bytes(&mut buffer);
    hex::encode(buffer)
}

/// Returns true if `code` has the shape of a generated short code.
///
/// Used on the redirect path to reject malformed codes without a
/// database round trip.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}
