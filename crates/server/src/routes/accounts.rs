//! Login and VIP check routes, driven by seeded mock payloads.

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use couponlab_core::payloads::{VipProfile, login_is_banned};

use crate::db::{mocks, upstream};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for login.
#[derive(Debug, Deserialize)]
pub struct LoginParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Attempt a login against the canned upstream response.
///
/// With `userId`, the user's `upstream_mock` row is used; without it, the
/// shared `LOGIN` mock. Only a real JSON boolean `true` under `isBanned`
/// blocks the login - the default fixture seeds a string `"true"`, so the
/// login succeeds when it plainly should not.
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<String> {
    let payload = match params.user_id.as_deref() {
        Some(user_id) => upstream::get_response(state.pool(), user_id).await?,
        None => mocks::get_mock_json(state.pool(), "LOGIN").await?,
    };
    let Some(json) = payload else {
        return Err(AppError::MockData("no login payload seeded".to_owned()));
    };

    let banned = login_is_banned(&json)
        .map_err(|e| AppError::MockData(format!("login payload is not valid JSON: {e}")))?;

    if banned {
        Ok("Blocked".to_owned())
    } else {
        Ok("Login Success (Should be Blocked!)".to_owned())
    }
}

/// Check VIP access against the seeded `VIP` profile payload.
#[instrument(skip(state))]
pub async fn check_vip(State(state): State<AppState>) -> Result<String> {
    let Some(json) = mocks::get_mock_json(state.pool(), "VIP").await? else {
        return Err(AppError::MockData("no VIP payload seeded".to_owned()));
    };

    let profile = VipProfile::parse(&json)
        .map_err(|e| AppError::MockData(format!("VIP payload is not valid JSON: {e}")))?;

    if profile.vip {
        Ok("Welcome VIP".to_owned())
    } else {
        Ok("Access Denied".to_owned())
    }
}
