//! Debug and inspection routes under `/test`.

use std::fmt::Write as _;

use axum::Json;
use axum::extract::{Query, State};
use chrono::Local;
use serde::Deserialize;
use tracing::instrument;

use couponlab_core::validation::normalize;
use couponlab_core::{Coupon, CouponStatus};

use crate::db::{CouponRepository, upstream};
use crate::error::Result;
use crate::fixtures::Fixture;
use crate::routes::coupons::ApplyCouponParams;
use crate::state::AppState;

/// Dump the seeded coupon row as JSON (`null` when absent).
#[instrument(skip(state))]
pub async fn coupon_data(State(state): State<AppState>) -> Result<Json<Option<Coupon>>> {
    let repo = CouponRepository::new(state.pool());
    let coupon = repo.get_by_code(Fixture::COUPON_CODE).await?;
    Ok(Json(coupon))
}

/// Per-condition validation trace for a coupon request.
///
/// Shows the raw and normalized category comparison side by side: the
/// apply predicate compares byte-for-byte with no normalization, and this
/// trace makes the difference visible. Two deliberate discrepancies from
/// the apply predicate:
///
/// - `Categories equal` compares *normalized* strings,
/// - `Not expired` treats a coupon expiring today as still live.
#[instrument(skip(state), fields(code = %params.code))]
pub async fn debug_coupon(
    State(state): State<AppState>,
    Query(params): Query<ApplyCouponParams>,
) -> Result<String> {
    let repo = CouponRepository::new(state.pool());
    let Some(coupon) = repo.get_by_code(&params.code).await? else {
        return Ok("Error: Coupon code not found".to_owned());
    };

    let today = Local::now().date_naive();
    let normalized_input = normalize(&params.category);
    let normalized_db = normalize(&coupon.category);

    let mut out = String::new();
    let _ = writeln!(out, "Input category: '{}'", params.category);
    let _ = writeln!(out, "DB category: '{}'", coupon.category);
    let _ = writeln!(out, "Normalized input: '{normalized_input}'");
    let _ = writeln!(out, "Normalized DB: '{normalized_db}'");
    let _ = writeln!(out, "Categories equal: {}", normalized_input == normalized_db);
    let _ = writeln!(
        out,
        "Status active: {}",
        coupon.status == CouponStatus::Active.as_str()
    );
    let _ = writeln!(out, "Not expired: {}", today <= coupon.expiry_date);
    let _ = writeln!(out, "Amount valid: {}", params.amount >= coupon.min_amount);
    let _ = writeln!(out, "Min amount: {}", coupon.min_amount);
    let _ = writeln!(out, "Current amount: {}", params.amount);

    Ok(out)
}

/// Query parameters for the upstream mock dump.
#[derive(Debug, Deserialize)]
pub struct UpstreamMockParams {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Dump the raw seeded upstream payload for a user.
#[instrument(skip(state), fields(user_id = %params.user_id))]
pub async fn upstream_mock(
    State(state): State<AppState>,
    Query(params): Query<UpstreamMockParams>,
) -> Result<String> {
    match upstream::get_response(state.pool(), &params.user_id).await? {
        Some(payload) => Ok(payload),
        None => Ok("Error: no upstream mock for user".to_owned()),
    }
}
