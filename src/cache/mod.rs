//! Cache Module
//!
//! Bounded in-memory store of employee records with sliding expiry and
//! least-recently-accessed eviction. Used as the read fallback when the
//! upstream service is unavailable.

mod entry;
mod handle;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::EmployeeCache;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
