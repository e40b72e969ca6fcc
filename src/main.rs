//! Employee Proxy - a resilient front for a remote employee store
//!
//! Forwards employee requests upstream with bounded retries and serves cached
//! records when the upstream service is unavailable.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_proxy::api::{create_router, AppState};
use employee_proxy::config::Config;
use employee_proxy::tasks::spawn_refresh_task;
use employee_proxy::upstream::HttpUpstreamClient;

/// Main entry point for the employee proxy.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the upstream client and the fallback cache
/// 4. Start the background cache refresh task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Employee Proxy");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_max_size={}, cache_expire_minutes={}, upstream={}, refresh_interval_ms={}, port={}",
        config.cache_max_size,
        config.cache_expire_minutes,
        config.upstream_base_url,
        config.refresh_interval_ms,
        config.server_port
    );

    let upstream =
        HttpUpstreamClient::from_config(&config).context("failed to build upstream HTTP client")?;
    let state = AppState::from_config(&config, Arc::new(upstream));
    info!("Upstream client and cache initialized");

    let refresh_handle = spawn_refresh_task(state.service.clone(), config.refresh_interval());
    info!("Background cache refresh task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresh_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the refresh task.
async fn shutdown_signal(refresh_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    refresh_handle.abort();
    warn!("Cache refresh task aborted");
}
