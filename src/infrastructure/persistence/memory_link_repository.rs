//! In-process implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    links: HashMap<String, Link>,
}

/// Keeps links in a map keyed by short code.
///
/// Every mutation happens under the write lock, so inserts are checked for
/// duplicate codes and click increments are atomic, matching the guarantees
/// of [`crate::infrastructure::persistence::PgLinkRepository`]. Data is lost
/// on restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory link storage");
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&new_link.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_short_code_key" }),
            ));
        }

        inner.next_id += 1;
        let link = new_link.into_link(inner.next_id);
        inner.links.insert(link.short_code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.links.get(short_code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .links
            .values()
            .filter(|link| link.long_url == long_url)
            .min_by_key(|link| (link.created_at, link.id))
            .cloned())
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.links.get_mut(short_code).map(|link| {
            link.clicks += 1;
            link.clone()
        }))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;

        let mut links: Vec<Link> = inner.links.values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn delete(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.inner.write().await.links.remove(short_code).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.links.len() as i64)
    }
}
