//! Integration Tests for the upstream HTTP client
//!
//! Runs `HttpUpstreamClient` against a fake upstream over real HTTP.

mod common;

use common::{client_for, dead_address, employee, mock_employees, FakeUpstream, UPSTREAM_PATH};
use employee_proxy::error::UpstreamError;
use employee_proxy::models::CreateEmployeeInput;
use employee_proxy::upstream::EmployeeUpstream;
use uuid::Uuid;

// == List ==

#[tokio::test]
async fn test_list_decodes_envelope() {
    let employees = mock_employees();
    let fake = FakeUpstream::with_employees(employees.clone());
    let client = client_for(&fake.spawn().await);

    assert_eq!(client.list().await.unwrap(), employees);
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_list_retries_server_errors() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);
    fake.fail_next(2, 500);

    let employees = client.list().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(fake.hits(), 3);
}

#[tokio::test]
async fn test_list_exhausts_retries() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);
    fake.go_down();

    let result = client.list().await;

    match result {
        Err(UpstreamError::Unavailable { attempts, last }) => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, UpstreamError::Server { status: 503, .. }));
        }
        other => panic!("expected Unavailable, got {:?}", other),
    }
    assert_eq!(fake.hits(), 3);
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);
    fake.fail_next(5, 429);

    let result = client.list().await;

    assert!(matches!(result, Err(UpstreamError::Rejected { status: 429, .. })));
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_not_retried() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);
    fake.send_garbage_next();

    let result = client.list().await;

    assert!(matches!(result, Err(UpstreamError::Malformed(_))));
    assert_eq!(fake.hits(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    let addr = dead_address().await;
    let client = client_for(&format!("http://{}{}", addr, UPSTREAM_PATH));

    let result = client.list().await;

    assert!(matches!(result, Err(UpstreamError::Unavailable { attempts: 3, .. })));
}

// == Get By Id ==

#[tokio::test]
async fn test_get_by_id_found() {
    let target = employee("Leo Funk", 311999);
    let fake = FakeUpstream::with_employees(vec![target.clone()]);
    let client = client_for(&fake.spawn().await);

    let found = client.get_by_id(target.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(target));
}

#[tokio::test]
async fn test_get_by_id_missing_is_none() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);

    assert_eq!(client.get_by_id(Uuid::new_v4()).await.unwrap(), None);
    assert_eq!(fake.hits(), 1);
}

// == Create ==

#[tokio::test]
async fn test_create_returns_assigned_id() {
    let fake = FakeUpstream::default();
    let client = client_for(&fake.spawn().await);
    let input = CreateEmployeeInput {
        name: "Alice Smith".to_string(),
        salary: 40000,
        age: 30,
        title: "Engineer".to_string(),
    };

    let created = client.create(&input).await.unwrap().unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.name, "Alice Smith");
    assert_eq!(created.email.as_deref(), Some("alicesmith@company.com"));
    assert_eq!(fake.employees(), vec![created]);
}

#[tokio::test]
async fn test_create_empty_body_is_none() {
    let fake = FakeUpstream::default();
    let client = client_for(&fake.spawn().await);
    fake.empty_create();
    let input = CreateEmployeeInput {
        name: "Alice".to_string(),
        salary: 40000,
        age: 30,
        title: "Engineer".to_string(),
    };

    assert_eq!(client.create(&input).await.unwrap(), None);
}

// == Delete ==

#[tokio::test]
async fn test_delete_by_name() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);

    assert!(client.delete("John Doe").await.unwrap());
    assert!(!client.delete("John Doe").await.unwrap());
    assert_eq!(fake.employees().len(), 1);
}

#[tokio::test]
async fn test_delete_refused() {
    let fake = FakeUpstream::with_employees(mock_employees());
    let client = client_for(&fake.spawn().await);
    fake.refuse_delete();

    assert!(!client.delete("John Doe").await.unwrap());
    assert_eq!(fake.employees().len(), 2);
}
