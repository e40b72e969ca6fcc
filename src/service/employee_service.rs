//! Record service
//!
//! Decides per operation whether to trust upstream, fall back to the cache,
//! or raise a domain error. Validation always happens before any network call.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::EmployeeCache;
use crate::error::{ProxyError, Result, UpstreamError};
use crate::models::{CreateEmployeeInput, Employee};
use crate::upstream::EmployeeUpstream;
use crate::validation::{is_valid_name, parse_id};

/// Number of names returned by the top earners operation
pub const TOP_EARNER_LIMIT: usize = 10;

/// Result of a delete that reached upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream confirmed the delete; carries the resolved name
    Deleted(String),
    /// Upstream answered without confirming the delete
    NotDeleted,
}

/// Orchestrates the upstream client and the fallback cache.
///
/// Cheap to clone; clones share the same upstream client and cache.
#[derive(Clone)]
pub struct EmployeeService {
    upstream: Arc<dyn EmployeeUpstream>,
    cache: EmployeeCache,
}

impl EmployeeService {
    pub fn new(upstream: Arc<dyn EmployeeUpstream>, cache: EmployeeCache) -> Self {
        Self { upstream, cache }
    }

    pub fn cache(&self) -> &EmployeeCache {
        &self.cache
    }

    // == List All ==
    /// Returns every record from upstream, or the cache snapshot when the
    /// upstream call fails. Does not write through to the cache.
    pub async fn list_all(&self) -> Vec<Employee> {
        match self.upstream.list().await {
            Ok(employees) => employees,
            Err(err) => {
                let cached = self.cache.values().await;
                warn!(
                    error = %err,
                    cached = cached.len(),
                    "Failed to fetch employees from upstream, serving from cache"
                );
                cached
            }
        }
    }

    // == Search By Name ==
    /// Case-insensitive substring search over `list_all`.
    pub async fn search_by_name(&self, search: &str) -> Result<Vec<Employee>> {
        if !is_valid_name(search) {
            return Err(ProxyError::InvalidInput(format!(
                "Invalid search name provided: {}",
                search
            )));
        }

        let needle = search.to_lowercase();
        let matches: Vec<Employee> = self
            .list_all()
            .await
            .into_iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            return Err(ProxyError::NotFound(format!(
                "No employee found with name {}",
                search
            )));
        }
        Ok(matches)
    }

    // == Get By Id ==
    /// Fetches one record from upstream, falling back to the cache when the
    /// upstream call fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee> {
        let uuid = parse_id(id)?;

        let employee = match self.upstream.get_by_id(uuid).await {
            Ok(found) => found,
            Err(err) => {
                warn!(%uuid, error = %err, "Failed to fetch employee from upstream, trying cache");
                self.cache.get(&uuid.to_string()).await
            }
        };

        employee.ok_or_else(|| ProxyError::NotFound(format!("No employee found with id {}", id)))
    }

    // == Top Salary ==
    /// Highest salary among all records.
    pub async fn top_salary(&self) -> Result<u64> {
        self.list_all()
            .await
            .iter()
            .map(|employee| employee.salary)
            .max()
            .ok_or_else(|| ProxyError::NotFound("No employees present".to_string()))
    }

    // == Top Ten Earners ==
    /// Names of the highest earners, at most `TOP_EARNER_LIMIT`.
    ///
    /// Equal salaries keep their upstream order.
    pub async fn top_ten_earner_names(&self) -> Vec<String> {
        top_earner_names(self.list_all().await, TOP_EARNER_LIMIT)
    }

    // == Create ==
    /// Creates a record upstream, mirrors it into the cache and returns its
    /// upstream-assigned identifier.
    pub async fn create(&self, input: &CreateEmployeeInput) -> Result<Uuid> {
        if !is_valid_name(&input.name) {
            return Err(ProxyError::InvalidInput(format!(
                "Invalid employee name provided: {}",
                input.name
            )));
        }

        let created = self.upstream.create(input).await.map_err(|err| {
            warn!(error = %err, "Upstream create failed");
            ProxyError::RemoteAccessFailure(format!(
                "Exception occurred while calling remote service, {}",
                err
            ))
        })?;

        let Some(employee) = created else {
            return Err(ProxyError::CreationFailed(
                "Upstream returned no employee".to_string(),
            ));
        };
        let Some(id) = employee.id else {
            return Err(ProxyError::CreationFailed(
                "Upstream returned an employee without id".to_string(),
            ));
        };

        self.cache.put(id.to_string(), employee).await;
        info!(%id, "Employee created and cached");
        Ok(id)
    }

    // == Delete ==
    /// Resolves the record's name, deletes it upstream by name and drops it
    /// from the cache on success.
    ///
    /// An unconfirmed delete is a normal `DeleteOutcome::NotDeleted`, not an error.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome> {
        let name = self.get_by_id(id).await?.name;
        let key = parse_id(id)?.to_string();

        let deleted = self.upstream.delete(&name).await.map_err(|err: UpstreamError| {
            warn!(id, error = %err, "Upstream delete failed");
            ProxyError::from(err)
        })?;

        if deleted {
            self.cache.invalidate(&key).await;
            info!(id, name = %name, "Employee deleted");
            Ok(DeleteOutcome::Deleted(name))
        } else {
            info!(id, "Upstream did not delete employee");
            Ok(DeleteOutcome::NotDeleted)
        }
    }

    // == Refresh Cache ==
    /// Writes every upstream record into the cache and sweeps expired entries.
    ///
    /// Calls upstream directly so a failed refresh leaves cached entries
    /// untouched instead of re-inserting them.
    pub async fn refresh_cache(&self) -> std::result::Result<usize, UpstreamError> {
        let employees = self.upstream.list().await?;

        let mut refreshed = 0;
        for employee in employees {
            match employee.cache_key() {
                Some(key) => {
                    self.cache.put(key, employee).await;
                    refreshed += 1;
                }
                None => debug!(name = %employee.name, "Skipping employee without id"),
            }
        }

        let purged = self.cache.purge_expired().await;
        info!(refreshed, purged, "Cache refreshed");
        Ok(refreshed)
    }
}

/// Sorts by descending salary (stable) and keeps the first `limit` names.
fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees
        .into_iter()
        .take(limit)
        .map(|employee| employee.name)
        .collect()
}
