//! Destructive store seeding.
//!
//! Drops, recreates, and fills all four tables. Safe to run repeatedly;
//! every run fully replaces the previous contents.

use std::path::PathBuf;

use tracing::info;

use couponlab_server::config::DEFAULT_DATABASE_URL;
use couponlab_server::db;

use super::resolve_fixture;

/// Seed the store.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded or any database
/// operation fails.
pub async fn run(
    file: Option<PathBuf>,
    database_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = database_url
        .or_else(|| std::env::var("COUPONLAB_DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

    let fixture = resolve_fixture(file)?;

    let pool = db::create_pool(&database_url).await?;
    info!(url = %database_url, "connected to store");

    let summary = db::seed(&pool, &fixture).await?;

    info!("Seeding complete!");
    info!("  sys_config rows: {}", summary.config_rows);
    info!("  mocks rows: {}", summary.mock_rows);
    info!("  upstream_mock rows: {}", summary.upstream_rows);
    info!("  coupons rows: {}", summary.coupon_rows);
    info!("You can now start the server.");

    Ok(())
}
