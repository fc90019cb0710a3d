//! HTTP route handlers for the record service.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Fixed liveness payload
//! GET    /health/ready        - Readiness check (verifies the store)
//!
//! # Goods
//! GET    /goods/              - List all goods
//! GET    /goods/{id}          - Get one goods record
//! POST   /goods/              - Create a goods record
//! PUT    /goods/{id}          - Replace a goods record
//! DELETE /goods/{id}          - Delete a goods record
//!
//! # Users
//! GET    /users/              - List all users
//! GET    /users/{id}          - Get one user
//! POST   /users/              - Create a user
//! PUT    /users/{id}          - Replace a user
//! DELETE /users/{id}          - Delete a user
//!
//! # Orders
//! GET    /orders/             - List all orders
//! GET    /orders/{id}         - Get one order
//! POST   /orders/             - Create an order
//! PUT    /orders/{id}         - Replace an order
//! DELETE /orders/{id}         - Delete an order
//! ```
//!
//! Every resource endpoint performs exactly one store statement. Creates
//! and updates validate the payload before touching the store.

pub mod goods;
pub mod orders;
pub mod users;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};

use crate::models::Confirmation;
use crate::state::AppState;

/// Create the goods routes router.
pub fn goods_routes() -> Router<AppState> {
    Router::new()
        .route("/goods/", get(goods::index).post(goods::create))
        .route(
            "/goods/{id}",
            get(goods::show).put(goods::update).delete(goods::remove),
        )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(users::index).post(users::create))
        .route(
            "/users/{id}",
            get(users::show).put(users::update).delete(users::remove),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders/", get(orders::index).post(orders::create))
        .route(
            "/orders/{id}",
            get(orders::show).put(orders::update).delete(orders::remove),
        )
}

/// Create all routes for the record service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health/ready", get(readiness))
        .merge(goods_routes())
        .merge(user_routes())
        .merge(order_routes())
}

/// Fixed liveness payload. Does not check dependencies.
async fn root() -> Json<Confirmation> {
    Json(Confirmation { message: "started" })
}

/// Readiness check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
