//! Service-level integration tests: liveness, readiness, routing.

use axum::http::StatusCode;
use market_records_integration_tests::{send, test_app};
use serde_json::json;

#[tokio::test]
async fn root_returns_the_fixed_liveness_payload() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "started" }));
}

#[tokio::test]
async fn readiness_reports_ok_when_the_store_is_reachable() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_routes_return_not_found() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_integer_ids_are_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/goods/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resources_are_isolated_from_each_other() {
    let app = test_app().await;

    let goods = json!({ "name": "Teapot", "description": null, "price": 24.0 });
    send(&app, "POST", "/goods/", Some(&goods)).await;

    let (_, users) = send(&app, "GET", "/users/", None).await;
    assert_eq!(users, json!([]));
    let (_, orders) = send(&app, "GET", "/orders/", None).await;
    assert_eq!(orders, json!([]));
}
