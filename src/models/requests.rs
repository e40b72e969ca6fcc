//! Request DTOs for the employee proxy API
//!
//! Defines the structure of incoming HTTP request bodies and of the bodies
//! forwarded to the upstream service.

use serde::{Deserialize, Serialize};

/// Maximum accepted length for a new employee's name
pub const MAX_NAME_LENGTH: usize = 80;
/// Youngest accepted employee age
pub const MIN_AGE: u32 = 16;
/// Oldest accepted employee age
pub const MAX_AGE: u32 = 75;

/// Request body for creating an employee (POST /client/employees)
///
/// Forwarded to the upstream service unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
}

impl CreateEmployeeInput {
    /// Validates the structural field rules.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name must not be blank".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Some(format!(
                "Name must not exceed {} characters",
                MAX_NAME_LENGTH
            ));
        }
        if self.salary == 0 {
            return Some("Salary must be positive".to_string());
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Some(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE));
        }
        if self.title.trim().is_empty() {
            return Some("Title must not be blank".to_string());
        }
        None
    }
}

/// Body of the upstream delete call, which is addressed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

impl DeleteEmployeeInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
