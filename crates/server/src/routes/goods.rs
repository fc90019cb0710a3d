//! Goods route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use market_records_core::GoodsId;

use crate::db::{GoodsRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::{Confirmation, Goods, GoodsPayload};
use crate::state::AppState;

/// List all goods.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Goods>>> {
    let goods = GoodsRepository::new(state.pool()).list().await?;
    Ok(Json(goods))
}

/// Get one goods record by id.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Goods>> {
    let goods = GoodsRepository::new(state.pool())
        .get(GoodsId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("goods {id}")))?;

    Ok(Json(goods))
}

/// Create a goods record.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GoodsPayload>,
) -> Result<Json<Goods>> {
    payload.validate()?;

    let created = GoodsRepository::new(state.pool()).create(&payload).await?;
    Ok(Json(created))
}

/// Replace a goods record.
///
/// Echoes the submitted payload plus the path id on success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GoodsPayload>,
) -> Result<Json<Goods>> {
    payload.validate()?;

    let goods_id = GoodsId::new(id);
    GoodsRepository::new(state.pool())
        .update(goods_id, &payload)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("goods {id}")),
            other => AppError::Database(other),
        })?;

    Ok(Json(Goods::new(goods_id, payload)))
}

/// Delete a goods record.
///
/// Always returns the fixed confirmation, whether or not a row existed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Confirmation>> {
    GoodsRepository::new(state.pool())
        .delete(GoodsId::new(id))
        .await?;

    Ok(Json(Confirmation {
        message: "Goods deleted",
    }))
}
