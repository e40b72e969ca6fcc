//! Service Module
//!
//! Business operations over employee records, combining the upstream client
//! with the fallback cache.

mod employee_service;

pub use employee_service::{DeleteOutcome, EmployeeService, TOP_EARNER_LIMIT};
