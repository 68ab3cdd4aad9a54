//! DTOs describing stored links.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Public view of a link.
///
/// ```json
/// {
///   "longUrl": "https://example.com",
///   "shortCode": "aB3xY9k",
///   "shortUrl": "https://sho.rt/api/v1/aB3xY9k",
///   "clicks": 0,
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub long_url: String,
    pub short_code: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            long_url: link.long_url,
            short_code: link.short_code,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Outcome of a delete request.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_response_shape() {
        let link = Link::new(
            1,
            "abc2345".to_string(),
            "https://example.com".to_string(),
            4,
            Utc::now(),
        );

        let value = serde_json::to_value(LinkResponse::new(
            link,
            "https://sho.rt/abc2345".to_string(),
        ))
        .unwrap();

        assert_eq!(value["longUrl"], "https://example.com");
        assert_eq!(value["shortCode"], "abc2345");
        assert_eq!(value["shortUrl"], "https://sho.rt/abc2345");
        assert_eq!(value["clicks"], 4);
        assert!(value["createdAt"].is_string());
        assert!(value.get("id").is_none());
    }
}
