//! Order repository for database operations.
//!
//! Inserts never verify that the referenced user or goods rows exist; see
//! the note on `create_pool` in the module root.

use market_records_core::OrderId;
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{Order, OrderPayload};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders in store-native order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            "SELECT order_id, user_id, goods_id, order_date, status FROM orders",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get an order by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, order_id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            "SELECT order_id, user_id, goods_id, order_date, status FROM orders WHERE order_id = ?1",
        )
        .bind(order_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a new order, letting the store assign the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, payload: &OrderPayload) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, goods_id, order_date, status)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING order_id, user_id, goods_id, order_date, status
            ",
        )
        .bind(payload.user_id)
        .bind(payload.goods_id)
        .bind(&payload.order_date)
        .bind(&payload.status)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace every non-identifier field of the row matching `order_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        order_id: OrderId,
        payload: &OrderPayload,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET user_id = ?1, goods_id = ?2, order_date = ?3, status = ?4
            WHERE order_id = ?5
            ",
        )
        .bind(payload.user_id)
        .bind(payload.goods_id)
        .bind(&payload.order_date)
        .bind(&payload.status)
        .bind(order_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete an order by its id.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, order_id: OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE order_id = ?1")
            .bind(order_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
