//! Order route handlers.
//!
//! Creating or replacing an order never checks that the referenced user or
//! goods rows exist; the foreign keys are declarative only.

use axum::{
    Json,
    extract::{Path, State},
};
use market_records_core::OrderId;

use crate::db::{OrderRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::{Confirmation, Order, OrderPayload};
use crate::state::AppState;

/// List all orders.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}

/// Get one order by id.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .get(OrderId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(order))
}

/// Create an order.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Order>> {
    payload.validate()?;

    let created = OrderRepository::new(state.pool()).create(&payload).await?;
    Ok(Json(created))
}

/// Replace an order.
///
/// Echoes the submitted payload plus the path id on success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<Order>> {
    payload.validate()?;

    let order_id = OrderId::new(id);
    OrderRepository::new(state.pool())
        .update(order_id, &payload)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("order {id}")),
            other => AppError::Database(other),
        })?;

    Ok(Json(Order::new(order_id, payload)))
}

/// Delete an order.
///
/// Always returns the fixed confirmation, whether or not a row existed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Confirmation>> {
    OrderRepository::new(state.pool())
        .delete(OrderId::new(id))
        .await?;

    Ok(Json(Confirmation {
        message: "Order deleted",
    }))
}
