//! Employee Proxy - a resilient front for a remote employee store
//!
//! Validates and forwards requests to an upstream service over HTTP with
//! bounded retries, and serves cached records when the upstream is down.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use service::{DeleteOutcome, EmployeeService};
pub use tasks::spawn_refresh_task;
