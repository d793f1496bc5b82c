//! Destructive seeder: drop, recreate, and fill every table.
//!
//! Seeding is the only write path in the whole system and runs before any
//! request traffic (via the CLI, or a test harness). Each table is fully
//! replaced - there is no incremental mutation and no concurrent writer,
//! so no transaction is needed for correctness; the run is idempotent by
//! construction.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::fixtures::Fixture;

/// Error type for seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row counts written by a seed run, for operator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub config_rows: u64,
    pub mock_rows: u64,
    pub upstream_rows: u64,
    pub coupon_rows: u64,
}

/// Drop, recreate, and fill all four tables from `fixture`.
///
/// # Errors
///
/// Returns `SeedError::Database` if any statement fails.
pub async fn seed(pool: &SqlitePool, fixture: &Fixture) -> Result<SeedSummary, SeedError> {
    info!("resetting table: sys_config");
    sqlx::query("DROP TABLE IF EXISTS sys_config")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE TABLE sys_config (\
             config_key TEXT NOT NULL UNIQUE, \
             config_value TEXT NOT NULL)",
    )
    .execute(pool)
    .await?;
    let mut config_rows = 0;
    for (key, value) in [
        ("LOCALE", fixture.sys_locale.as_str()),
        ("ORDER_PREFIX", fixture.order_prefix.as_str()),
    ] {
        config_rows += sqlx::query("INSERT INTO sys_config (config_key, config_value) VALUES (?1, ?2)")
            .bind(key)
            .bind(value)
            .execute(pool)
            .await?
            .rows_affected();
    }

    info!("resetting table: mocks");
    sqlx::query("DROP TABLE IF EXISTS mocks").execute(pool).await?;
    sqlx::query("CREATE TABLE mocks (type TEXT NOT NULL UNIQUE, json TEXT NOT NULL)")
        .execute(pool)
        .await?;
    let mut mock_rows = 0;
    for (kind, json) in [
        ("BANK", fixture.bank_balance.as_str()),
        ("LOGIN", fixture.login_json.as_str()),
        ("VIP", fixture.vip_json.as_str()),
    ] {
        mock_rows += sqlx::query("INSERT INTO mocks (type, json) VALUES (?1, ?2)")
            .bind(kind)
            .bind(json)
            .execute(pool)
            .await?
            .rows_affected();
    }

    info!("resetting table: upstream_mock");
    sqlx::query("DROP TABLE IF EXISTS upstream_mock")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE TABLE upstream_mock (\
             user_id TEXT NOT NULL UNIQUE, \
             json_response TEXT NOT NULL)",
    )
    .execute(pool)
    .await?;
    let upstream_rows =
        sqlx::query("INSERT INTO upstream_mock (user_id, json_response) VALUES (?1, ?2)")
            .bind(Fixture::UPSTREAM_USER)
            .bind(&fixture.login_json)
            .execute(pool)
            .await?
            .rows_affected();

    info!("resetting table: coupons");
    sqlx::query("DROP TABLE IF EXISTS coupons")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE TABLE coupons (\
             code TEXT NOT NULL UNIQUE, \
             status TEXT NOT NULL, \
             category TEXT NOT NULL, \
             min_amount DOUBLE NOT NULL, \
             expiry_date DATE NOT NULL)",
    )
    .execute(pool)
    .await?;
    let coupon_rows = sqlx::query(
        "INSERT INTO coupons (code, status, category, min_amount, expiry_date) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(Fixture::COUPON_CODE)
    .bind(&fixture.coupon_status)
    .bind(&fixture.coupon_category)
    .bind(fixture.coupon_min_amount)
    .bind(fixture.coupon_expiry_date)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(SeedSummary {
        config_rows,
        mock_rows,
        upstream_rows,
        coupon_rows,
    })
}
