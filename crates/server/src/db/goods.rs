//! Goods repository for database operations.

use market_records_core::GoodsId;
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{Goods, GoodsPayload};

/// Repository for goods database operations.
pub struct GoodsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GoodsRepository<'a> {
    /// Create a new goods repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all goods in store-native order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Goods>, RepositoryError> {
        let rows = sqlx::query_as::<_, Goods>(
            "SELECT goods_id, name, description, price FROM goods",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a goods record by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, goods_id: GoodsId) -> Result<Option<Goods>, RepositoryError> {
        let row = sqlx::query_as::<_, Goods>(
            "SELECT goods_id, name, description, price FROM goods WHERE goods_id = ?1",
        )
        .bind(goods_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a new goods record, letting the store assign the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, payload: &GoodsPayload) -> Result<Goods, RepositoryError> {
        let row = sqlx::query_as::<_, Goods>(
            r"
            INSERT INTO goods (name, description, price)
            VALUES (?1, ?2, ?3)
            RETURNING goods_id, name, description, price
            ",
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace every non-identifier field of the row matching `goods_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        goods_id: GoodsId,
        payload: &GoodsPayload,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE goods
            SET name = ?1, description = ?2, price = ?3
            WHERE goods_id = ?4
            ",
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(goods_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a goods record by its id.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, goods_id: GoodsId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM goods WHERE goods_id = ?1")
            .bind(goods_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
