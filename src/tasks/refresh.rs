//! Cache Refresh Task
//!
//! Background task that periodically copies the upstream collection into the
//! fallback cache. Failures are logged and the task waits for the next tick.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::service::EmployeeService;

/// `tokio::time::interval` panics on a zero period.
const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns the periodic cache refresh.
///
/// The first refresh runs immediately so a cold cache gets warmed at startup.
/// A slow refresh delays the following tick rather than bunching ticks up.
/// A zero `interval` is raised to one millisecond.
///
/// # Arguments
/// * `service` - Service whose cache is refreshed
/// * `interval` - Time between refresh starts
///
/// # Returns
/// A JoinHandle that can be aborted during graceful shutdown.
pub fn spawn_refresh_task(service: EmployeeService, interval: Duration) -> JoinHandle<()> {
    let interval = interval.max(MIN_REFRESH_INTERVAL);

    tokio::spawn(async move {
        info!(
            interval_ms = interval.as_millis() as u64,
            "Starting cache refresh task"
        );

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            if let Err(err) = service.refresh_cache().await {
                warn!(error = %err, "Failed to refresh employee cache");
            }
        }
    })
}
