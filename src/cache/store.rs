//! Cache Store Module
//!
//! Single-threaded cache engine combining HashMap storage with LRU tracking
//! and sliding expiry. Shared access goes through `EmployeeCache`.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::models::Employee;

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    /// Record storage keyed by identifier
    entries: HashMap<String, CacheEntry>,
    /// Access order for eviction
    lru: LruTracker,
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Idle time after which an entry counts as absent
    expire_after: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of records; 0 disables storage
    /// * `expire_after` - Sliding expiry window measured from last access
    pub fn new(max_entries: usize, expire_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            expire_after,
        }
    }

    // == Put ==
    /// Inserts or replaces a record and marks it as most recently accessed.
    ///
    /// Returns the key evicted to make room, if any.
    pub fn put(&mut self, key: String, record: Employee) -> Option<String> {
        if self.max_entries == 0 {
            return None;
        }

        let mut evicted = None;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            // Prefer reclaiming idle entries over evicting live ones
            if self.purge_expired() == 0 {
                if let Some(oldest) = self.lru.evict_oldest() {
                    self.entries.remove(&oldest);
                    self.stats.record_eviction();
                    evicted = Some(oldest);
                }
            }
        }

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(record));
        evicted
    }

    // == Get ==
    /// Returns the record if present and not expired, refreshing its access time.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<Employee> {
        let expire_after = self.expire_after;
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(expire_after) {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        entry.touch();
        let record = entry.record.clone();
        self.lru.touch(key);
        self.stats.record_hit();
        Some(record)
    }

    // == Invalidate ==
    /// Removes an entry. Returns whether anything was removed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            true
        } else {
            false
        }
    }

    // == Values ==
    /// Snapshot of every non-expired record, in unspecified order.
    ///
    /// Does not count as an access.
    pub fn values(&self) -> Vec<Employee> {
        self.entries
            .values()
            .filter(|entry| !entry.is_expired(self.expire_after))
            .map(|entry| entry.record.clone())
            .collect()
    }

    // == Purge Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.expire_after))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats
    }

    /// Returns the number of stored entries, including ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
