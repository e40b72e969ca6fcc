//! Upstream Module
//!
//! Outbound calls to the upstream employee service and the retry policy
//! wrapped around each of them. Nothing here touches the cache.

mod client;
mod retry;

pub use client::{EmployeeUpstream, HttpUpstreamClient};
pub use retry::{with_retry, RetryPolicy};
