//! Database operations for the record store.
//!
//! # Tables
//!
//! - `goods` - goods catalog records
//! - `users` - user records (plain-text passwords, by longstanding contract)
//! - `orders` - order records referencing users and goods by id
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/server/migrations/` and run at
//! startup via [`MIGRATOR`], matching the original service which created
//! its tables on boot.

pub mod goods;
pub mod orders;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use goods::GoodsRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Embedded migrations from `crates/server/migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The `foreign_keys` pragma is explicitly left off (sqlx turns it on by
/// default): the orders table declares its references for documentation,
/// but the service accepts orders pointing at nonexistent users or goods.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
