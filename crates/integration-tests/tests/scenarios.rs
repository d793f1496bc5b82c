//! End-to-end tests for the remaining demo scenarios.

use axum::http::StatusCode;

use couponlab_integration_tests::TestContext;
use couponlab_server::fixtures::Fixture;

#[tokio::test]
async fn health_answers_ok() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

// --- Order creation -------------------------------------------------------

#[tokio::test]
async fn order_with_numeric_user_is_created() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/create-order?userId=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Order Created: ORD_42");
}

#[tokio::test]
async fn order_with_non_numeric_user_is_a_format_error() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/create-order?userId=abc").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Format Error: ORD_abc");
}

#[tokio::test]
async fn lowercase_prefix_breaks_order_creation() {
    let fixture = Fixture {
        order_prefix: "ord".to_owned(),
        ..Fixture::default()
    };
    let ctx = TestContext::with_fixture(fixture).await;
    let (status, body) = ctx.get("/api/create-order?userId=42").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Format Error: ord_42");
}

// --- Login ----------------------------------------------------------------

#[tokio::test]
async fn string_banned_flag_lets_the_login_through() {
    // The default fixture stores isBanned as a JSON string, not a boolean.
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/login").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Login Success (Should be Blocked!)");
}

#[tokio::test]
async fn boolean_banned_flag_blocks_the_login() {
    let fixture = Fixture {
        login_json: r#"{"isBanned": true}"#.to_owned(),
        ..Fixture::default()
    };
    let ctx = TestContext::with_fixture(fixture).await;
    let (_, body) = ctx.get("/api/login").await;
    assert_eq!(body, "Blocked");
}

#[tokio::test]
async fn login_with_user_id_uses_the_upstream_mock() {
    let fixture = Fixture {
        login_json: r#"{"isBanned": true}"#.to_owned(),
        ..Fixture::default()
    };
    let ctx = TestContext::with_fixture(fixture).await;
    // The upstream_mock row for u_992 is seeded from the same payload.
    let (_, body) = ctx.get("/api/login?userId=u_992").await;
    assert_eq!(body, "Blocked");
}

#[tokio::test]
async fn login_with_unknown_user_is_a_server_error() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/login?userId=u_000").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal server error");
}

// --- VIP check ------------------------------------------------------------

#[tokio::test]
async fn misnamed_vip_field_denies_access() {
    // The default fixture spells the flag isVIP; the profile wants VIP.
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/check-vip").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Access Denied");
}

#[tokio::test]
async fn exact_vip_field_grants_access() {
    let fixture = Fixture {
        vip_json: r#"{"VIP": true}"#.to_owned(),
        ..Fixture::default()
    };
    let ctx = TestContext::with_fixture(fixture).await;
    let (_, body) = ctx.get("/api/check-vip").await;
    assert_eq!(body, "Welcome VIP");
}

// --- Report generation ----------------------------------------------------

#[tokio::test]
async fn french_locale_breaks_report_formatting() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/generate-report?amount=100").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Invalid Format: 100,00");
}

#[tokio::test]
async fn english_locale_formats_reports_cleanly() {
    let fixture = Fixture {
        sys_locale: "en_US".to_owned(),
        ..Fixture::default()
    };
    let ctx = TestContext::with_fixture(fixture).await;
    let (status, body) = ctx.get("/api/generate-report?amount=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Report: 100.00");
}

#[tokio::test]
async fn malformed_report_amount_is_a_request_error() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.get("/api/generate-report?amount=ten").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// --- Bank transfer --------------------------------------------------------

#[tokio::test]
async fn negative_seeded_balance_refuses_the_transfer() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/api/bank-transfer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Insufficient Funds: -500");
}

#[tokio::test]
async fn positive_seeded_balance_allows_the_transfer() {
    let fixture = Fixture {
        bank_balance: "2500.50".to_owned(),
        ..Fixture::default()
    };
    let ctx = TestContext::with_fixture(fixture).await;
    let (_, body) = ctx.get("/api/bank-transfer").await;
    assert_eq!(body, "Transfer OK");
}
