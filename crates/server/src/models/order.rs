//! Order domain types.
//!
//! An order references a user and a goods row by id, but the references are
//! never checked against their tables: the relation is declared in the
//! schema only. `order_date` is free-form text, not a parsed date.

use market_records_core::{GoodsId, OrderId, UserId};
use serde::{Deserialize, Serialize};

use super::{ValidationError, check_max_chars};

/// Maximum length of the free-form order date.
pub const ORDER_DATE_MAX: usize = 32;
/// Maximum length of the free-form status.
pub const STATUS_MAX: usize = 32;

/// Client-supplied order body (no identifier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub user_id: UserId,
    pub goods_id: GoodsId,
    pub order_date: String,
    pub status: Option<String>,
}

impl OrderPayload {
    /// Validate the payload against the field constraints.
    ///
    /// No existence check is made for `user_id` or `goods_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        check_max_chars(&mut errors, "order_date", &self.order_date, ORDER_DATE_MAX);
        if let Some(status) = &self.status {
            check_max_chars(&mut errors, "status", status, STATUS_MAX);
        }

        ValidationError::from_fields(errors)
    }
}

/// An order record, including its store-assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub goods_id: GoodsId,
    pub order_date: String,
    pub status: Option<String>,
}

impl Order {
    /// Build a record from a validated payload and a store-assigned id.
    #[must_use]
    pub fn new(order_id: OrderId, payload: OrderPayload) -> Self {
        Self {
            order_id,
            user_id: payload.user_id,
            goods_id: payload.goods_id,
            order_date: payload.order_date,
            status: payload.status,
        }
    }
}
