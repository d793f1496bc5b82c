//! Coupon Lab Server - seeded demo HTTP service.
//!
//! Serves the demo endpoints over an embedded SQLite store. The store
//! must be seeded first:
//!
//! ```bash
//! cargo run -p couponlab-cli -- seed
//! cargo run -p couponlab-server
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use couponlab_server::routes::build_router;
use couponlab_server::{AppConfig, AppState, db};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "couponlab_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Connect to the embedded store
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!(url = %config.database_url, "database pool created");

    // NOTE: Seeding is NOT run automatically on startup.
    // Run it explicitly via: cargo run -p couponlab-cli -- seed

    let state = AppState::initialize(config, pool).await;
    let addr = state.config().bind_addr();
    let app = build_router(state);

    tracing::info!(%addr, "starting couponlab server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
