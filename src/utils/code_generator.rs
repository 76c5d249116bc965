//! Short code generation and validation utilities.
//!
//! Codes are derived from the URL itself rather than drawn at random: the same
//! normalized URL always produces the same code, so no store query is needed to
//! know a URL's code and a repeated URL maps onto its existing pair.

use crate::error::AppError;
use serde_json::json;
use sha2::{Digest, Sha384};

/// Length of every generated short code.
pub const SHORT_CODE_LENGTH: usize = 10;

/// Longest short code accepted by the store.
pub const MAX_SHORT_CODE_LENGTH: usize = 10;

/// Number of leading digest bytes fed into the base-62 encoder.
const DIGEST_PREFIX_BYTES: usize = 10;

/// Base-62 digits in ascending value order.
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Derives the short code for a normalized URL.
///
/// Takes the first 10 bytes of the SHA-384 digest of the URL, reads them as a
/// big-endian integer and encodes it in base 62 (most significant digit first).
/// Encodings shorter than [`SHORT_CODE_LENGTH`] are left-padded with `'0'`, the
/// zero digit, and longer ones keep their leading [`SHORT_CODE_LENGTH`] digits.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("https://google.com/");
/// assert_eq!(code, "46plOCsbuD");
/// ```
pub fn generate_code(normalized_url: &str) -> String {
    let digest = Sha384::digest(normalized_url.as_bytes());

    let mut prefix = [0u8; 16];
    prefix[16 - DIGEST_PREFIX_BYTES..].copy_from_slice(&digest[..DIGEST_PREFIX_BYTES]);

    let encoded = encode_base62(u128::from_be_bytes(prefix));

    let mut code = String::with_capacity(SHORT_CODE_LENGTH);
    for _ in encoded.len()..SHORT_CODE_LENGTH {
        code.push('0');
    }
    code.push_str(&encoded);
    code.truncate(SHORT_CODE_LENGTH);
    code
}

/// Encodes `value` in base 62, most significant digit first.
fn encode_base62(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    // The alphabet is pure ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Validates a short code before it is stored.
///
/// # Rules
///
/// - Length: 1-10 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
pub fn validate_short_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_SHORT_CODE_LENGTH {
        return Err(AppError::invalid_input(
            "Short code must be 1-10 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::invalid_input(
            "Short code can only contain ASCII letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
