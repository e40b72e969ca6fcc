//! Fake upstream employee service for integration tests
//!
//! Serves the upstream envelope protocol from memory on an ephemeral port,
//! with switches to inject failures.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use employee_proxy::models::{CreateEmployeeInput, DeleteEmployeeInput, Employee, Envelope};
use employee_proxy::upstream::{HttpUpstreamClient, RetryPolicy};
use uuid::Uuid;

pub const UPSTREAM_PATH: &str = "/api/v1/employee";

#[derive(Default)]
struct FakeState {
    employees: Vec<Employee>,
    /// Requests still to be answered with `fail_status`
    fail_remaining: u32,
    fail_status: u16,
    /// Next answer is a 200 with an undecodable body
    garbage_next: bool,
    /// Create answers with an empty body
    empty_create: bool,
    /// Delete answers `data: false`
    refuse_delete: bool,
    /// Total requests received
    hits: u32,
}

#[derive(Clone, Default)]
pub struct FakeUpstream {
    state: Arc<Mutex<FakeState>>,
}

impl FakeUpstream {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().employees = employees;
        fake
    }

    /// Answers the next `count` requests with `status`.
    pub fn fail_next(&self, count: u32, status: u16) {
        let mut state = self.state.lock().unwrap();
        state.fail_remaining = count;
        state.fail_status = status;
    }

    /// Answers every request with 503 until `recover` is called.
    pub fn go_down(&self) {
        self.fail_next(u32::MAX, 503);
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().fail_remaining = 0;
    }

    pub fn send_garbage_next(&self) {
        self.state.lock().unwrap().garbage_next = true;
    }

    pub fn empty_create(&self) {
        self.state.lock().unwrap().empty_create = true;
    }

    pub fn refuse_delete(&self) {
        self.state.lock().unwrap().refuse_delete = true;
    }

    pub fn hits(&self) -> u32 {
        self.state.lock().unwrap().hits
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state.lock().unwrap().employees.clone()
    }

    /// Counts the request and returns an injected failure, if any.
    fn intercept(&self) -> Option<Response> {
        let mut state = self.state.lock().unwrap();
        state.hits += 1;

        if state.fail_remaining > 0 {
            state.fail_remaining -= 1;
            let status = StatusCode::from_u16(state.fail_status).unwrap();
            let body = Json(Envelope::<bool>::error("injected failure"));
            return Some((status, body).into_response());
        }
        if state.garbage_next {
            state.garbage_next = false;
            return Some((StatusCode::OK, "<html>not json</html>").into_response());
        }
        None
    }

    /// Serves the fake on 127.0.0.1 and returns its resource base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route(UPSTREAM_PATH, get(list).post(create).delete(delete))
            .route(&format!("{}/:id", UPSTREAM_PATH), get(get_one))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}{}", addr, UPSTREAM_PATH)
    }
}

async fn list(State(fake): State<FakeUpstream>) -> Response {
    if let Some(failure) = fake.intercept() {
        return failure;
    }
    Json(Envelope::handled(fake.employees())).into_response()
}

async fn get_one(State(fake): State<FakeUpstream>, Path(id): Path<Uuid>) -> Response {
    if let Some(failure) = fake.intercept() {
        return failure;
    }
    match fake.employees().into_iter().find(|e| e.id == Some(id)) {
        Some(employee) => Json(Envelope::handled(employee)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(Envelope::<Employee>::error("not found"))).into_response(),
    }
}

async fn create(State(fake): State<FakeUpstream>, Json(input): Json<CreateEmployeeInput>) -> Response {
    if let Some(failure) = fake.intercept() {
        return failure;
    }
    let mut state = fake.state.lock().unwrap();
    if state.empty_create {
        return StatusCode::OK.into_response();
    }

    let employee = Employee {
        id: Some(Uuid::new_v4()),
        email: Some(format!("{}@company.com", input.name.to_lowercase().replace(' ', ""))),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
    };
    state.employees.push(employee.clone());
    Json(Envelope::handled(employee)).into_response()
}

async fn delete(State(fake): State<FakeUpstream>, Json(input): Json<DeleteEmployeeInput>) -> Response {
    if let Some(failure) = fake.intercept() {
        return failure;
    }
    let mut state = fake.state.lock().unwrap();
    if state.refuse_delete {
        return Json(Envelope::handled(false)).into_response();
    }

    let before = state.employees.len();
    state.employees.retain(|e| e.name != input.name);
    Json(Envelope::handled(state.employees.len() < before)).into_response()
}

// == Helpers ==

pub fn employee(name: &str, salary: u64) -> Employee {
    Employee {
        id: Some(Uuid::new_v4()),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: Some(format!("{}@company.com", name.to_lowercase().replace(' ', ""))),
    }
}

pub fn mock_employees() -> Vec<Employee> {
    vec![employee("John Doe", 400000), employee("John Ji", 390000)]
}

/// Retry policy with the default shape but millisecond delays.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(10), 2)
}

pub fn client_for(base_url: &str) -> HttpUpstreamClient {
    HttpUpstreamClient::new(base_url, Duration::from_secs(5))
        .unwrap()
        .with_retry_policy(fast_retry())
}

/// A local address with nothing listening on it.
pub async fn dead_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
