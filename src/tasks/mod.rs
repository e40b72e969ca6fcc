//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache refresh: mirrors the upstream collection into the fallback cache

mod refresh;

pub use refresh::spawn_refresh_task;
