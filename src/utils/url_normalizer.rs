//! URL normalization and sanitization utilities.
//!
//! Every original URL is stored in the canonical form produced here, and the
//! short code is derived from that form, so `https://google.com` and
//! `https://GOOGLE.com:443` end up as the same pair.

use url::Url;

/// Longest accepted URL, in bytes.
pub const MAX_URL_LENGTH: usize = 2083;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL is longer than {MAX_URL_LENGTH} characters")]
    TooLong,
}

/// Normalizes a URL to a canonical absolute form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Empty path**: Becomes `/`
/// 5. **Query and fragment**: Preserved as-is
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::TooLong`] above [`MAX_URL_LENGTH`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("https://google.com").unwrap(), "https://google.com/");
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let input = input.trim();
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    // Host lowercasing, default-port removal and the empty-path slash are applied
    // by the WHATWG parser for special schemes.
    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(normalized)
}

/// Returns true if `identifier` claims to be a URL rather than a short code.
pub fn looks_like_url(identifier: &str) -> bool {
    identifier.contains("://")
}
