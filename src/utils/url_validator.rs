//! Long URL validation.
//!
//! The stored URL is exactly what the client sent. Validation only decides
//! whether it is acceptable; it never rewrites the input, so deduplication
//! stays an exact string comparison.

use url::Url;

/// Schemes a long URL may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Reasons a long URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL must not contain control characters or surrounding whitespace")]
    InvalidCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme '{0}', expected http, https or ftp")]
    UnsupportedScheme(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is a well-formed absolute URL.
///
/// # Rules
///
/// 1. Must not be empty or whitespace only
/// 2. Must not contain control characters (tab, CR, LF, ...) or leading or
///    trailing whitespace. The parser would silently drop them while the raw
///    string is what gets stored and later sent as the `Location` header.
/// 3. Must parse as an absolute URL (`example.com` without a scheme fails)
/// 4. Scheme must be `http`, `https` or `ftp`
/// 5. Must have a non-empty host
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] that applies.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com").is_ok());
/// assert!(validate_long_url("not-a-url").is_err());
/// ```
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.trim() != input || input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
