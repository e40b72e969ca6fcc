//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

// == Defaults ==
const DEFAULT_CACHE_MAX_SIZE: usize = 500;
const DEFAULT_CACHE_EXPIRE_MINUTES: u64 = 10;
const DEFAULT_UPSTREAM_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 300_000;
const DEFAULT_SERVER_PORT: u16 = 8111;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Proxy configuration parameters.
///
/// All values are fixed at startup and can be set via environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of records the fallback cache can hold
    pub cache_max_size: usize,
    /// Minutes since last access after which a cached record is dropped
    pub cache_expire_minutes: u64,
    /// Base URL of the upstream employee resource
    pub upstream_base_url: String,
    /// Background cache refresh interval in milliseconds
    pub refresh_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Per-request timeout for upstream calls in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cached records (default: 500)
    /// - `CACHE_EXPIRE_MINUTES` - Sliding expiry window (default: 10)
    /// - `UPSTREAM_BASE_URL` - Upstream resource URL (default: http://localhost:8080)
    /// - `CACHE_REFRESH_INTERVAL_MS` - Refresh period (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 8111)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            cache_max_size: parse_var("CACHE_MAX_SIZE", DEFAULT_CACHE_MAX_SIZE),
            cache_expire_minutes: parse_var("CACHE_EXPIRE_MINUTES", DEFAULT_CACHE_EXPIRE_MINUTES),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            refresh_interval_ms: parse_positive_var(
                "CACHE_REFRESH_INTERVAL_MS",
                DEFAULT_REFRESH_INTERVAL_MS,
            ),
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT),
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    /// Sliding expiry window as a Duration.
    pub fn cache_expiry(&self) -> Duration {
        Duration::from_secs(self.cache_expire_minutes.saturating_mul(60))
    }

    /// Background refresh period as a Duration.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Upstream request timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_size: DEFAULT_CACHE_MAX_SIZE,
            cache_expire_minutes: DEFAULT_CACHE_EXPIRE_MINUTES,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            server_port: DEFAULT_SERVER_PORT,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Like `parse_var`, but zero also falls back to `default`.
fn parse_positive_var(name: &str, default: u64) -> u64 {
    match parse_var(name, default) {
        0 => default,
        value => value,
    }
}
