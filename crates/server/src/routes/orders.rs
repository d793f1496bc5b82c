//! Order creation route.

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use couponlab_core::order_id;

use crate::db::config_entries;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for order creation.
#[derive(Debug, Deserialize)]
pub struct CreateOrderParams {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Create an order id from the configured prefix and the user id.
///
/// The prefix comes from the `ORDER_PREFIX` config row on every request
/// (an empty string when the row is missing), so re-seeding changes
/// behavior without a restart. A malformed result is a 500, mirroring the
/// hard failure this scenario demonstrates.
#[instrument(skip(state), fields(user_id = %params.user_id))]
pub async fn create_order(
    State(state): State<AppState>,
    Query(params): Query<CreateOrderParams>,
) -> Result<String> {
    let prefix = config_entries::get_value(state.pool(), "ORDER_PREFIX")
        .await?
        .unwrap_or_default();

    let id = order_id::build(&prefix, &params.user_id);
    if order_id::is_well_formed(&id) {
        Ok(format!("Order Created: {id}"))
    } else {
        Err(AppError::OrderFormat(id))
    }
}
