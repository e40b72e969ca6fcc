//! API Module
//!
//! HTTP handlers and routing for the employee proxy REST API.
//!
//! # Endpoints
//! - `GET /client/employees` - All employees
//! - `GET /client/employees/search/:search` - Employees whose name contains `search`
//! - `GET /client/employees/:id` - One employee
//! - `GET /client/employees/highestSalary` - Highest salary
//! - `GET /client/employees/topTenHighestEarningEmployeeNames` - Top earner names
//! - `POST /client/employees` - Create an employee
//! - `DELETE /client/employees/:id` - Delete an employee
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
