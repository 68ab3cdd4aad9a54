//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `short_code` is unique across all records. `clicks` only ever grows, one
/// step per successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `clicks` always starts at zero, so it is not part of the insert model.
/// `created_at` is chosen by the caller rather than by a schema default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    pub fn new(short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            long_url,
            created_at,
        }
    }

    /// Turns the insert model into a stored record with the given id.
    pub fn into_link(self, id: i64) -> Link {
        Link::new(id, self.short_code, self.long_url, 0, self.created_at)
    }
}
