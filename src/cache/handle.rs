//! Shared cache handle
//!
//! Wraps `CacheStore` in `Arc<RwLock<>>` so request handlers and the
//! background refresh task can use one cache concurrently. Each method takes
//! the lock once, so individual operations are atomic; there is no
//! cross-operation transaction and the last writer to a key wins.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::models::Employee;

#[derive(Debug, Clone)]
pub struct EmployeeCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl EmployeeCache {
    /// Creates a cache holding at most `max_entries` records that expire
    /// after `expire_after` without access.
    pub fn new(max_entries: usize, expire_after: Duration) -> Self {
        Self::from_store(CacheStore::new(max_entries, expire_after))
    }

    pub fn from_store(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a cache from process configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.cache_max_size, config.cache_expiry())
    }

    /// Looks up a live record, sliding its expiry window.
    pub async fn get(&self, id: &str) -> Option<Employee> {
        // Write lock: a hit updates recency and stats
        self.inner.write().await.get(id)
    }

    /// Inserts or replaces a record.
    pub async fn put(&self, id: String, record: Employee) {
        let evicted = self.inner.write().await.put(id, record);
        if let Some(key) = evicted {
            debug!(evicted = %key, "Cache at capacity, evicted least recently accessed entry");
        }
    }

    /// Removes a record if present.
    pub async fn invalidate(&self, id: &str) -> bool {
        self.inner.write().await.invalidate(id)
    }

    /// Snapshot of all live records.
    pub async fn values(&self) -> Vec<Employee> {
        self.inner.read().await.values()
    }

    /// Drops every expired entry, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.inner.write().await.purge_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
