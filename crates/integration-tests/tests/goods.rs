//! Integration tests for goods CRUD.

use axum::http::StatusCode;
use market_records_integration_tests::{send, test_app};
use serde_json::{Value, json};

#[tokio::test]
async fn create_then_get_returns_input_plus_assigned_id() {
    let app = test_app().await;

    let payload = json!({
        "name": "Teapot",
        "description": "Ceramic, 1.2l",
        "price": 24.0
    });
    let (status, created) = send(&app, "POST", "/goods/", Some(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["goods_id"], json!(1));
    assert_eq!(created["name"], json!("Teapot"));
    assert_eq!(created["description"], json!("Ceramic, 1.2l"));
    assert_eq!(created["price"], json!(24.0));

    let (status, fetched) = send(&app, "GET", "/goods/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_description_round_trips_as_null() {
    let app = test_app().await;

    let payload = json!({ "name": "Spoon", "description": null, "price": 2.5 });
    let (status, created) = send(&app, "POST", "/goods/", Some(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["description"], Value::Null);

    let (_, fetched) = send(&app, "GET", "/goods/1", None).await;
    assert_eq!(fetched["description"], Value::Null);
}

#[tokio::test]
async fn out_of_range_prices_are_rejected_without_creating_rows() {
    let app = test_app().await;

    for price in [0.0, -5.0, 100_001.0] {
        let payload = json!({ "name": "Teapot", "description": null, "price": price });
        let (status, body) = send(&app, "POST", "/goods/", Some(&payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "price {price}");
        assert_eq!(body["errors"][0]["field"], json!("price"));
    }

    // The goods table must remain empty
    let (status, list) = send(&app, "GET", "/goods/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn boundary_price_is_accepted() {
    let app = test_app().await;

    let payload = json!({ "name": "Gold bar", "description": null, "price": 100_000.0 });
    let (status, created) = send(&app, "POST", "/goods/", Some(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["price"], json!(100_000.0));
}

#[tokio::test]
async fn overlong_name_is_rejected() {
    let app = test_app().await;

    let payload = json!({ "name": "x".repeat(65), "description": null, "price": 1.0 });
    let (status, body) = send(&app, "POST", "/goods/", Some(&payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], json!("name"));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let app = test_app().await;

    let payload = json!({ "name": "Teapot", "description": "Ceramic", "price": 24.0 });
    send(&app, "POST", "/goods/", Some(&payload)).await;

    // Full replacement, including dropping the description
    let replacement = json!({ "name": "Kettle", "description": null, "price": 30.0 });
    let (status, updated) = send(&app, "PUT", "/goods/1", Some(&replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["goods_id"], json!(1));
    assert_eq!(updated["name"], json!("Kettle"));
    assert_eq!(updated["description"], Value::Null);

    // Not a merge: the old description is gone
    let (_, fetched) = send(&app, "GET", "/goods/1", None).await;
    assert_eq!(fetched["name"], json!("Kettle"));
    assert_eq!(fetched["description"], Value::Null);
    assert_eq!(fetched["price"], json!(30.0));
}

#[tokio::test]
async fn update_missing_id_returns_not_found() {
    let app = test_app().await;

    let replacement = json!({ "name": "Kettle", "description": null, "price": 30.0 });
    let (status, _) = send(&app, "PUT", "/goods/99", Some(&replacement)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_validates_before_touching_the_store() {
    let app = test_app().await;

    let payload = json!({ "name": "Teapot", "description": null, "price": 24.0 });
    send(&app, "POST", "/goods/", Some(&payload)).await;

    let bad = json!({ "name": "Teapot", "description": null, "price": -1.0 });
    let (status, _) = send(&app, "PUT", "/goods/1", Some(&bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // The row is untouched
    let (_, fetched) = send(&app, "GET", "/goods/1", None).await;
    assert_eq!(fetched["price"], json!(24.0));
}

#[tokio::test]
async fn get_missing_id_returns_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/goods/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("goods 42 not found"));
}

#[tokio::test]
async fn delete_removes_the_row_and_is_idempotent() {
    let app = test_app().await;

    let payload = json!({ "name": "Teapot", "description": null, "price": 24.0 });
    send(&app, "POST", "/goods/", Some(&payload)).await;

    let (status, body) = send(&app, "DELETE", "/goods/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Goods deleted" }));

    let (status, _) = send(&app, "GET", "/goods/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/goods/", None).await;
    assert_eq!(list, json!([]));

    // Deleting a nonexistent id still returns the fixed confirmation
    let (status, body) = send(&app, "DELETE", "/goods/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Goods deleted" }));
}
