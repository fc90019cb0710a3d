//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use market_records_core::UserId;

use crate::db::{RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::models::{Confirmation, User, UserPayload};
use crate::state::AppState;

/// List all users.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Get one user by id.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .get(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    Ok(Json(user))
}

/// Create a user.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    payload.validate()?;

    let created = UserRepository::new(state.pool()).create(&payload).await?;
    Ok(Json(created))
}

/// Replace a user.
///
/// Echoes the submitted payload plus the path id on success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>> {
    payload.validate()?;

    let user_id = UserId::new(id);
    UserRepository::new(state.pool())
        .update(user_id, &payload)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("user {id}")),
            other => AppError::Database(other),
        })?;

    Ok(Json(User::new(user_id, payload)))
}

/// Delete a user.
///
/// Always returns the fixed confirmation, whether or not a row existed.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Confirmation>> {
    UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;

    Ok(Json(Confirmation {
        message: "User deleted",
    }))
}
