//! Bank transfer route, backed by the seeded bank mock.

use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Attempt a transfer: allowed only with a strictly positive balance.
#[instrument(skip(state))]
pub async fn bank_transfer(State(state): State<AppState>) -> Result<String> {
    let balance = state.bank().check_balance();
    if balance > 0.0 {
        Ok("Transfer OK".to_owned())
    } else {
        Ok(format!("Insufficient Funds: {balance}"))
    }
}
