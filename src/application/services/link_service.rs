//! Short link allocation and access service.

use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};
use crate::utils::url_validator::validate_long_url;

/// How many candidate codes [`LinkService::shorten`] tries before giving up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving and managing short links.
///
/// Holds an explicit store handle and the base URL used to compose full short
/// links. All mutable state lives in the store, so the service itself is
/// shared freely between requests.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    base_url: String,
    generate: fn() -> String,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// A trailing `/` on `base_url` is dropped so short URLs never contain `//`.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
            generate: generate_code,
        }
    }

    /// Replaces the short code generator.
    pub fn with_generator(mut self, generate: fn() -> String) -> Self {
        self.generate = generate;
        self
    }

    /// Returns the link for `long_url`, creating it if needed.
    ///
    /// # Deduplication
    ///
    /// If a link with exactly this long URL already exists it is returned
    /// unchanged. There is no normalisation: trailing slashes, case and query
    /// order all make a URL distinct.
    ///
    /// # Code Generation
    ///
    /// Draws a random 7-character code and checks the store for it. Reserved
    /// route words and codes already in use count as collisions, and so does a
    /// duplicate-key conflict reported by the store on insert (another request
    /// took the same code in between). After [`MAX_ALLOCATION_ATTEMPTS`]
    /// collisions the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not a well-formed absolute URL.
    /// Returns [`AppError::AllocationExhausted`] if no free code was found.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn shorten(&self, long_url: String) -> Result<Link, AppError> {
        validate_long_url(&long_url).map_err(|e| {
            AppError::bad_request(
                "Invalid URL format. Please provide a valid URL including http:// or https://",
                json!({ "reason": e.to_string() }),
            )
        })?;

        if let Some(existing) = self.link_repository.find_by_long_url(&long_url).await? {
            debug!(short_code = %existing.short_code, "Returning existing link");
            return Ok(existing);
        }

        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let short_code = (self.generate)();

            // Unreachable with the default generator, see `RESERVED_CODES`.
            if is_reserved(&short_code)
                || self
                    .link_repository
                    .find_by_code(&short_code)
                    .await?
                    .is_some()
            {
                counter!("short_code_collisions_total").increment(1);
                debug!(attempt, %short_code, "Short code collision");
                continue;
            }

            let new_link = NewLink::new(short_code, long_url.clone(), Utc::now());

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    counter!("links_created_total").increment(1);
                    info!(short_code = %link.short_code, attempt, "Short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { details, .. }) => {
                    counter!("short_code_collisions_total").increment(1);
                    warn!(attempt, %details, "Short code taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::allocation_exhausted(
            "Failed to generate unique short code after multiple attempts",
            json!({ "attempts": MAX_ALLOCATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its long URL and counts the visit.
    ///
    /// The lookup and the click increment are one atomic store operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .increment_clicks(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))?;

        counter!("links_resolved_total").increment(1);
        debug!(short_code, clicks = link.clicks, "Short link resolved");

        Ok(link.long_url)
    }

    /// Returns the link for a short code without touching its click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn stats(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns every link, most recently created first.
    pub async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Deletes a link, reporting whether anything was removed.
    ///
    /// Deleting an unknown code is not an error; it returns `Ok(false)`.
    pub async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        let deleted = self.link_repository.delete(short_code).await?;

        if deleted {
            counter!("links_deleted_total").increment(1);
            info!(short_code, "Short link deleted");
        }

        Ok(deleted)
    }

    /// Counts stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Base URL short links are built from, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
}
