mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server(common::InMemoryStore::new());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let store = common::InMemoryStore::new();
    store.go_offline();
    let server = common::make_server(store);

    let response = server.get("/health").expect_failure().await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["database"]["message"], "Database error");
}

#[tokio::test]
async fn test_health_does_not_require_user_header() {
    let server = common::make_server(common::InMemoryStore::new());

    server.get("/health").await.assert_status_ok();
}
