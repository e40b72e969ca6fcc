//! HTTP client for the upstream employee service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::{CreateEmployeeInput, DeleteEmployeeInput, Employee, Envelope};
use crate::upstream::{with_retry, RetryPolicy};

/// Outbound operations against the upstream employee resource.
///
/// Implementations never consult the cache. Every method fails with
/// `UpstreamError::Unavailable` once transient failures exhaust the retry
/// policy; 4xx answers and undecodable bodies fail immediately.
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// Full collection of records.
    async fn list(&self) -> Result<Vec<Employee>, UpstreamError>;

    /// A single record, or `None` when upstream does not know the id.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Employee>, UpstreamError>;

    /// Creates a record; `None` when upstream accepted but returned no payload.
    async fn create(&self, input: &CreateEmployeeInput) -> Result<Option<Employee>, UpstreamError>;

    /// Deletes by name, returning upstream's success flag.
    async fn delete(&self, name: &str) -> Result<bool, UpstreamError>;
}

/// `EmployeeUpstream` over HTTP with reqwest.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use employee_proxy::upstream::{EmployeeUpstream, HttpUpstreamClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpUpstreamClient::new("http://localhost:8112/api/v1/employee", Duration::from_secs(10))?;
/// let employees = client.list().await?;
/// println!("{} employees", employees.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpUpstreamClient {
    /// Creates a client for `base_url` with the default retry policy.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            retry: RetryPolicy::default(),
        })
    }

    /// Creates a client from process configuration.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(config.upstream_base_url.clone(), config.upstream_timeout())
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Exchange ==
    /// Sends one logical call under the retry policy and decodes the envelope.
    ///
    /// `build` is invoked once per attempt.
    async fn exchange<T, F>(
        &self,
        operation: &str,
        build: F,
    ) -> Result<Option<Envelope<T>>, UpstreamError>
    where
        T: DeserializeOwned,
        F: Fn(&Client) -> RequestBuilder,
    {
        with_retry(&self.retry, operation, || {
            let request = build(&self.client);
            async move {
                let response = request.send().await?;
                read_envelope(response).await
            }
        })
        .await
    }
}

#[async_trait]
impl EmployeeUpstream for HttpUpstreamClient {
    async fn list(&self) -> Result<Vec<Employee>, UpstreamError> {
        let url = self.base_url.clone();
        info!(url = %url, "Sending GET request to upstream");

        let envelope = self
            .exchange::<Vec<Employee>, _>("list", |client| client.request(Method::GET, &url))
            .await?;
        let employees = envelope.and_then(Envelope::into_data).unwrap_or_default();

        debug!(count = employees.len(), "Fetched employees from upstream");
        Ok(employees)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Employee>, UpstreamError> {
        let url = format!("{}/{}", self.base_url, id);
        info!(url = %url, "Sending GET request to upstream");

        let result = self
            .exchange::<Employee, _>("get_by_id", |client| client.request(Method::GET, &url))
            .await;

        match result {
            Ok(envelope) => Ok(envelope.and_then(Envelope::into_data)),
            Err(UpstreamError::Rejected { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                debug!(%id, "Upstream has no employee with this id");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Option<Employee>, UpstreamError> {
        let url = self.base_url.clone();
        info!(url = %url, name = %input.name, "Sending POST request to upstream");

        let envelope = self
            .exchange::<Employee, _>("create", |client| client.request(Method::POST, &url).json(input))
            .await?;
        Ok(envelope.and_then(Envelope::into_data))
    }

    async fn delete(&self, name: &str) -> Result<bool, UpstreamError> {
        let url = self.base_url.clone();
        let body = DeleteEmployeeInput::new(name);
        info!(url = %url, name, "Sending DELETE request to upstream");

        let envelope = self
            .exchange::<bool, _>("delete", |client| client.request(Method::DELETE, &url).json(&body))
            .await?;
        Ok(envelope.and_then(Envelope::into_data).unwrap_or(false))
    }
}

// == Response Decoding ==
/// Classifies the status and decodes the body of one upstream answer.
///
/// An empty 2xx body decodes to `None`.
async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<Envelope<T>>, UpstreamError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_server_error() {
        return Err(UpstreamError::Server {
            status: status.as_u16(),
            message: body,
        });
    }
    if !status.is_success() {
        return Err(UpstreamError::Rejected {
            status: status.as_u16(),
            message: body,
        });
    }
    if body.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&body)?))
}
