//! Unified error handling for the record service.
//!
//! Provides a unified `AppError` type that separates client input errors
//! from storage failures before responding. All route handlers should
//! return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;

/// Application-level error type for the record service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed a declared field constraint.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log storage failures; validation and not-found are expected
        // client outcomes and stay quiet.
        if matches!(self, Self::Database(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let body = match self {
            Self::Validation(err) => json!({ "errors": err.errors }),
            Self::NotFound(what) => json!({ "error": format!("{what} not found") }),
            Self::Database(_) => json!({ "error": "internal server error" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
