use client::ApiClient;
use shared_types::{AppErrorKind, Production, RawMaterial, GENERIC_FAILURE_MESSAGE};

use crate::common;

#[tokio::test]
async fn test_server_error_hides_details() {
    let backend = common::spawn_backend().await;
    let err = backend.api().list::<Production>().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
    assert!(!err.message.contains("db exploded"));
}

#[tokio::test]
async fn test_unexpected_body_shape_is_generic_failure() {
    let backend = common::spawn_backend().await;
    let err = backend.api().list::<RawMaterial>().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(format!("http://{addr}"));
    let err = api.list_users().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Transport);
    assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let backend = common::spawn_backend().await;
    let err = backend.api().schedules_for_user("stu-1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
