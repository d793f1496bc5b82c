//! Integration test harness for Coupon Lab.
//!
//! Seeds an in-memory SQLite store and drives the real axum router with
//! in-process requests - no listener, no ports.
//!
//! # Usage
//!
//! ```rust,ignore
//! let ctx = TestContext::new().await;
//! let (status, body) = ctx.get("/health").await;
//! assert_eq!(status, StatusCode::OK);
//! assert_eq!(body, "ok");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::IpAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use couponlab_server::fixtures::Fixture;
use couponlab_server::routes::build_router;
use couponlab_server::{AppConfig, AppState, db};

/// A seeded store plus the router built on top of it.
pub struct TestContext {
    pub pool: SqlitePool,
    pub router: Router,
}

impl TestContext {
    /// Seed the default fixture and build the app.
    pub async fn new() -> Self {
        Self::with_fixture(Fixture::default()).await
    }

    /// Seed a specific fixture and build the app.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory store cannot be created or seeded; tests
    /// cannot proceed without it.
    pub async fn with_fixture(fixture: Fixture) -> Self {
        let pool = db::create_memory_pool()
            .await
            .expect("create in-memory pool");
        db::seed(&pool, &fixture).await.expect("seed fixture");

        let config = AppConfig {
            database_url: "sqlite::memory:".to_owned(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
        };
        let state = AppState::initialize(config, pool.clone()).await;
        let router = build_router(state);

        Self { pool, router }
    }

    /// Issue an in-process GET request and collect the plain-text body.
    ///
    /// # Panics
    ///
    /// Panics on a malformed URI or an unreadable body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A fixture whose coupon stays valid far beyond any test run.
#[must_use]
pub fn evergreen_fixture() -> Fixture {
    Fixture {
        coupon_expiry_date: chrono::NaiveDate::from_ymd_opt(2099, 12, 31)
            .expect("valid date"),
        ..Fixture::default()
    }
}
