//! DTOs for link shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a URL.
///
/// Unknown fields are rejected so typos such as `longURL` fail loudly instead
/// of being ignored.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    #[validate(url(message = "Please provide a valid URL"))]
    pub long_url: String,
}
