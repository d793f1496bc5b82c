//! HTTP route handlers for the demo server.
//!
//! # Route Structure
//!
//! ```text
//! GET /health                  - Health check
//!
//! # Demo scenarios
//! GET /api/apply-coupon        - Multi-condition coupon validation
//! GET /api/create-order        - Order id construction + regex check
//! GET /api/login               - JSON boolean deserialization trap
//! GET /api/check-vip           - Field-naming deserialization trap
//! GET /api/generate-report     - Locale-sensitive number formatting
//! GET /api/bank-transfer       - Seeded mock bank balance
//!
//! # Debug / inspection
//! GET /test/coupon-data        - Seeded coupon row as JSON
//! GET /test/debug-coupon       - Per-condition validation trace
//! GET /test/upstream-mock      - Raw seeded upstream payload
//! ```
//!
//! All responses are plain text except `/test/coupon-data`.

pub mod accounts;
pub mod bank;
pub mod coupons;
pub mod debug;
pub mod orders;
pub mod reports;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Health check.
pub async fn health() -> &'static str {
    "ok"
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/apply-coupon", get(coupons::apply_coupon))
        .route("/api/create-order", get(orders::create_order))
        .route("/api/login", get(accounts::login))
        .route("/api/check-vip", get(accounts::check_vip))
        .route("/api/generate-report", get(reports::generate_report))
        .route("/api/bank-transfer", get(bank::bank_transfer))
        .route("/test/coupon-data", get(debug::coupon_data))
        .route("/test/debug-coupon", get(debug::debug_coupon))
        .route("/test/upstream-mock", get(debug::upstream_mock))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
