//! Store access and seeding tests against an in-memory SQLite database.

use axum::http::StatusCode;
use chrono::NaiveDate;

use couponlab_integration_tests::{TestContext, evergreen_fixture};
use couponlab_server::db::{self, CouponRepository, config_entries, mocks, upstream};
use couponlab_server::fixtures::Fixture;

#[tokio::test]
async fn config_store_fetch_by_key() {
    let ctx = TestContext::new().await;
    let locale = config_entries::get_value(&ctx.pool, "LOCALE")
        .await
        .expect("query ok");
    assert_eq!(locale.as_deref(), Some("fr_FR"));

    let missing = config_entries::get_value(&ctx.pool, "NO_SUCH_KEY")
        .await
        .expect("query ok");
    assert_eq!(missing, None);
}

#[tokio::test]
async fn mock_store_fetch_by_type() {
    let ctx = TestContext::new().await;
    let bank = mocks::get_mock_json(&ctx.pool, "BANK")
        .await
        .expect("query ok");
    assert_eq!(bank.as_deref(), Some("-500.00"));

    let missing = mocks::get_mock_json(&ctx.pool, "WEATHER")
        .await
        .expect("query ok");
    assert_eq!(missing, None);
}

#[tokio::test]
async fn upstream_store_fetch_by_user() {
    let ctx = TestContext::new().await;
    let seeded = upstream::get_response(&ctx.pool, Fixture::UPSTREAM_USER)
        .await
        .expect("query ok");
    assert_eq!(seeded.as_deref(), Some(r#"{"isBanned": "true"}"#));

    let missing = upstream::get_response(&ctx.pool, "u_000")
        .await
        .expect("query ok");
    assert_eq!(missing, None);
}

#[tokio::test]
async fn coupon_store_fetch_by_code() {
    let ctx = TestContext::new().await;
    let repo = CouponRepository::new(&ctx.pool);

    let coupon = repo
        .get_by_code(Fixture::COUPON_CODE)
        .await
        .expect("query ok")
        .expect("seeded coupon present");
    assert_eq!(coupon.code, "SUMMER_2024");
    assert_eq!(coupon.status, "ACTIVE");
    assert_eq!(coupon.category, "FOOD");
    assert!((coupon.min_amount - 50.0).abs() < f64::EPSILON);
    assert_eq!(
        coupon.expiry_date,
        NaiveDate::from_ymd_opt(2027, 12, 31).expect("valid date")
    );

    let missing = repo.get_by_code("NO_SUCH").await.expect("query ok");
    assert_eq!(missing, None);
}

#[tokio::test]
async fn seeding_twice_fully_replaces_the_data() {
    let ctx = TestContext::new().await;

    let second = Fixture {
        order_prefix: "SHOP".to_owned(),
        ..Fixture::default()
    };
    let summary = db::seed(&ctx.pool, &second).await.expect("reseed ok");
    assert_eq!(summary.config_rows, 2);
    assert_eq!(summary.mock_rows, 3);
    assert_eq!(summary.upstream_rows, 1);
    assert_eq!(summary.coupon_rows, 1);

    let prefix = config_entries::get_value(&ctx.pool, "ORDER_PREFIX")
        .await
        .expect("query ok");
    assert_eq!(prefix.as_deref(), Some("SHOP"));
}

#[tokio::test]
async fn coupon_data_endpoint_dumps_the_seeded_row() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/test/coupon-data").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["code"], "SUMMER_2024");
    assert_eq!(json["expiry_date"], "2027-12-31");
}

#[tokio::test]
async fn coupon_data_endpoint_is_null_when_the_row_is_absent() {
    let ctx = TestContext::new().await;
    sqlx::query("DELETE FROM coupons")
        .execute(&ctx.pool)
        .await
        .expect("delete ok");

    let (status, body) = ctx.get("/test/coupon-data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");
}

#[tokio::test]
async fn create_order_uses_an_empty_prefix_when_the_config_row_is_absent() {
    let ctx = TestContext::new().await;
    sqlx::query("DELETE FROM sys_config WHERE config_key = 'ORDER_PREFIX'")
        .execute(&ctx.pool)
        .await
        .expect("delete ok");

    let (status, body) = ctx.get("/api/create-order?userId=42").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Format Error: _42");
}

#[tokio::test]
async fn debug_trace_shows_the_normalization_discrepancy() {
    let ctx = TestContext::with_fixture(evergreen_fixture()).await;

    // Trailing space: the apply predicate rejects, the normalized
    // comparison in the trace says the categories are equal.
    let (_, apply) = ctx
        .get("/api/apply-coupon?code=SUMMER_2024&category=FOOD%20&amount=100")
        .await;
    assert_eq!(apply, "FAILURE: Invalid Coupon (Conditions not met)");

    let (status, trace) = ctx
        .get("/test/debug-coupon?code=SUMMER_2024&category=FOOD%20&amount=100")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(trace.contains("Input category: 'FOOD '"));
    assert!(trace.contains("Normalized input: 'FOOD'"));
    assert!(trace.contains("Categories equal: true"));
    assert!(trace.contains("Status active: true"));
    assert!(trace.contains("Amount valid: true"));
    assert!(trace.contains("Min amount: 50"));
}

#[tokio::test]
async fn debug_trace_for_unknown_code() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx
        .get("/test/debug-coupon?code=NO_SUCH&category=FOOD&amount=100")
        .await;
    assert_eq!(body, "Error: Coupon code not found");
}

#[tokio::test]
async fn upstream_mock_endpoint_returns_the_raw_payload() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/test/upstream-mock?userId=u_992").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"isBanned": "true"}"#);

    let (status, body) = ctx.get("/test/upstream-mock?userId=u_000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Error: no upstream mock for user");
}
