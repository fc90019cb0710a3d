//! User repository for database operations.

use market_records_core::UserId;
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{User, UserPayload};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users in store-native order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT user_id, name, lastname, email, user_password FROM users",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a user by their id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, user_id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, User>(
            "SELECT user_id, name, lastname, email, user_password FROM users WHERE user_id = ?1",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a new user, letting the store assign the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, payload: &UserPayload) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (name, lastname, email, user_password)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING user_id, name, lastname, email, user_password
            ",
        )
        .bind(&payload.name)
        .bind(&payload.lastname)
        .bind(&payload.email)
        .bind(&payload.user_password)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace every non-identifier field of the row matching `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matched.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        user_id: UserId,
        payload: &UserPayload,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = ?1, lastname = ?2, email = ?3, user_password = ?4
            WHERE user_id = ?5
            ",
        )
        .bind(&payload.name)
        .bind(&payload.lastname)
        .bind(&payload.email)
        .bind(&payload.user_password)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a user by their id.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, user_id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = ?1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
