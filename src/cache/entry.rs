//! Cache Entry Module
//!
//! A cached record together with its last-access time.

use std::time::{Duration, Instant};

use crate::models::Employee;

// == Cache Entry ==
/// A single cached record with sliding-expiry bookkeeping.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached record
    pub record: Employee,
    /// Last read or write of this entry
    pub last_accessed: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry whose last access is now.
    pub fn new(record: Employee) -> Self {
        Self {
            record,
            last_accessed: Instant::now(),
        }
    }

    // == Touch ==
    /// Marks the entry as accessed now, restarting its expiry window.
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }

    // == Idle Time ==
    /// Time elapsed since the last access.
    pub fn idle_for(&self) -> Duration {
        self.last_accessed.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has idled longer than `window`.
    ///
    /// An entry idle for exactly `window` is still live; it expires once the
    /// idle time strictly exceeds the window.
    pub fn is_expired(&self, window: Duration) -> bool {
        self.idle_for() > window
    }
}
