//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// `status` is `healthy` when every check passed, `degraded` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: StoreCheck,
}

/// Outcome of probing the link store.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: &'static str,

    /// Stored link count, present when the probe succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreCheck {
    pub fn ok(links: i64) -> Self {
        Self {
            status: "ok",
            links: Some(links),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            links: None,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
