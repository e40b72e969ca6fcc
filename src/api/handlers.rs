//! API Handlers
//!
//! HTTP request handlers mapping record service outcomes to status codes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::cache::EmployeeCache;
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{
    CreateEmployeeInput, CreatedResponse, Employee, ErrorResponse, HealthResponse,
    MessageResponse, StatsResponse,
};
use crate::service::{DeleteOutcome, EmployeeService};
use crate::upstream::EmployeeUpstream;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration and an upstream client.
    ///
    /// Initializes the fallback cache with the configured size and expiry.
    pub fn from_config(config: &Config, upstream: Arc<dyn EmployeeUpstream>) -> Self {
        let cache = EmployeeCache::from_config(config);
        Self::new(EmployeeService::new(upstream, cache))
    }
}

/// Handler for GET /client/employees
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<Employee>> {
    info!("Fetching all employees");
    Json(state.service.list_all().await)
}

/// Handler for GET /client/employees/search/:search
pub async fn search_handler(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<Json<Vec<Employee>>> {
    info!(search = %search, "Searching employees by name");
    let employees = state.service.search_by_name(&search).await?;
    Ok(Json(employees))
}

/// Handler for GET /client/employees/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    info!(id = %id, "Getting employee by id");
    let employee = state.service.get_by_id(&id).await?;
    Ok(Json(employee))
}

/// Handler for GET /client/employees/highestSalary
pub async fn highest_salary_handler(State(state): State<AppState>) -> Result<Json<u64>> {
    info!("Getting highest salary of employees");
    let salary = state.service.top_salary().await?;
    Ok(Json(salary))
}

/// Handler for GET /client/employees/topTenHighestEarningEmployeeNames
///
/// An empty result is reported as a server error.
pub async fn top_ten_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<String>>) {
    info!("Getting top 10 highest earning employee names");
    let names = state.service.top_ten_earner_names().await;
    let status = if names.is_empty() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    (status, Json(names))
}

/// Handler for POST /client/employees
pub async fn create_handler(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<Json<CreatedResponse>> {
    info!(name = %input.name, "Adding employee");
    if let Some(error_msg) = input.validate() {
        return Err(ProxyError::InvalidInput(error_msg));
    }

    let id = state.service.create(&input).await?;
    info!(%id, "Employee added successfully");
    Ok(Json(CreatedResponse::new(id)))
}

/// Handler for DELETE /client/employees/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    info!(id = %id, "Deleting employee");
    let response = match state.service.delete(&id).await? {
        DeleteOutcome::Deleted(name) => Json(MessageResponse::deleted(&name)).into_response(),
        DeleteOutcome::NotDeleted => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!(
                "Unable to delete Employee with ID: {}",
                id
            ))),
        )
            .into_response(),
    };
    Ok(response)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.cache().stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
