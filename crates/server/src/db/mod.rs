//! Read-only access to the seeded SQLite store, plus the seeder itself.
//!
//! # Tables
//!
//! - `sys_config` - key/value startup configuration (`LOCALE`, `ORDER_PREFIX`)
//! - `mocks` - type-keyed upstream payloads (`BANK`, `LOGIN`, `VIP`)
//! - `upstream_mock` - per-user canned upstream responses
//! - `coupons` - coupon rows
//!
//! All four tables are dropped and recreated on every seed run; request
//! handlers only ever read. Every fetch is by unique key and returns
//! `Ok(None)` for the not-found case - a missing row is domain data here,
//! not a fault.

pub mod config_entries;
pub mod coupons;
pub mod mocks;
pub mod seed;
pub mod upstream;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub use coupons::CouponRepository;
pub use seed::{SeedSummary, seed};

/// Error type for store access.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The underlying query failed (connectivity, missing table, ...).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A row was present but its contents could not be interpreted.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a SQLite connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}

/// Create a single-connection in-memory pool for tests.
///
/// SQLite gives every connection its own private `:memory:` database, so
/// the pool is capped at one connection to keep seeded data visible.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
}
