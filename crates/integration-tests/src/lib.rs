//! Integration tests for Market Records.
//!
//! Tests drive the real service router in-process via
//! [`tower::ServiceExt::oneshot`] over an in-memory SQLite database, so no
//! running server or external store is needed.
//!
//! # Test Categories
//!
//! - `goods` - Goods CRUD and price validation
//! - `users` - User CRUD and the concrete round-trip scenario
//! - `orders` - Order CRUD and unchecked foreign keys
//! - `service` - Liveness, readiness, and routing

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use market_records_server::config::ServiceConfig;
use market_records_server::db::MIGRATOR;
use market_records_server::state::AppState;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Build the service router over a fresh in-memory database.
///
/// The pool is capped at a single connection so every request sees the same
/// in-memory store, and the `foreign_keys` pragma is off to mirror the
/// production pool.
///
/// # Panics
///
/// Panics if the in-memory database cannot be set up.
pub async fn test_app() -> Router {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid in-memory url")
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory database");

    MIGRATOR.run(&pool).await.expect("run migrations");

    let config = ServiceConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
    };

    market_records_server::app(AppState::new(config, pool))
}

/// Send one request to the router and decode the JSON response body.
///
/// Returns `Value::Null` for empty bodies (e.g. the readiness probe).
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not valid JSON.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };

    (status, json)
}
