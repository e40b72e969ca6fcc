//! Data models for the employee proxy
//!
//! `Employee` and `Envelope` describe the upstream wire format; the request
//! and response modules hold the DTOs of the inbound HTTP surface.

pub mod employee;
pub mod envelope;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::Employee;
pub use envelope::{Envelope, EnvelopeStatus};
pub use requests::{CreateEmployeeInput, DeleteEmployeeInput};
pub use responses::{CreatedResponse, ErrorResponse, HealthResponse, MessageResponse, StatsResponse};
