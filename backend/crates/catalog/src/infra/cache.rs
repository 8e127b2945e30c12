//! Freshness Cache
//!
//! Decorates any [`CatalogSource`] and memoizes successful payloads by their
//! canonical request string. Entries are served for at most `ttl`; failures
//! are never stored.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::source::{CatalogSource, UpstreamRequest};
use crate::error::CatalogResult;

struct CacheEntry {
    stored_at: Instant,
    payload: serde_json::Value,
}

pub struct CachedCatalogSource<S> {
    inner: S,
    /// `None` disables memoization entirely
    ttl: Option<Duration>,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl<S> CachedCatalogSource<S> {
    pub fn new(inner: S, ttl: Option<Duration>) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of stored entries, fresh or not
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn lookup(&self, key: &str, ttl: Duration) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        (entry.stored_at.elapsed() < ttl).then(|| entry.payload.clone())
    }

    async fn store(&self, key: String, payload: serde_json::Value, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                payload,
            },
        );
    }
}

impl<S> CatalogSource for CachedCatalogSource<S>
where
    S: CatalogSource + Sync,
{
    async fn fetch(&self, request: &UpstreamRequest) -> CatalogResult<serde_json::Value> {
        let Some(ttl) = self.ttl else {
            return self.inner.fetch(request).await;
        };

        let key = request.to_string();

        if let Some(payload) = self.lookup(&key, ttl).await {
            tracing::debug!(request = %key, "Catalog cache hit");
            return Ok(payload);
        }

        let payload = self.inner.fetch(request).await?;
        self.store(key, payload.clone(), ttl).await;

        Ok(payload)
    }
}
