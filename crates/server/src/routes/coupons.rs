//! Coupon application route.

use axum::extract::{Query, State};
use chrono::Local;
use serde::Deserialize;
use tracing::instrument;

use couponlab_core::validation::evaluate;

use crate::db::CouponRepository;
use crate::error::Result;
use crate::state::AppState;

/// Query parameters for coupon application.
#[derive(Debug, Deserialize)]
pub struct ApplyCouponParams {
    pub code: String,
    pub category: String,
    pub amount: f64,
}

/// Apply a coupon to a hypothetical purchase.
///
/// Example: `/api/apply-coupon?code=SUMMER_2024&category=FOOD&amount=100`
///
/// An unknown code is a plain-text error sentence, not an HTTP error.
#[instrument(skip(state), fields(code = %params.code))]
pub async fn apply_coupon(
    State(state): State<AppState>,
    Query(params): Query<ApplyCouponParams>,
) -> Result<String> {
    let repo = CouponRepository::new(state.pool());
    let Some(coupon) = repo.get_by_code(&params.code).await? else {
        return Ok("Error: Coupon code not found".to_owned());
    };

    let today = Local::now().date_naive();
    let verdict = evaluate(&coupon, &params.category, params.amount, today);

    if verdict.approved {
        tracing::info!("coupon approved");
        Ok("SUCCESS: Coupon Applied!".to_owned())
    } else {
        if let Some(failed) = verdict.check(&verdict.reason) {
            tracing::info!(reason = %verdict.reason, detail = %failed.detail, "coupon rejected");
        }
        Ok("FAILURE: Invalid Coupon (Conditions not met)".to_owned())
    }
}
