//! Report generation route.

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for report generation.
#[derive(Debug, Deserialize)]
pub struct GenerateReportParams {
    pub amount: f64,
}

/// Format an amount for a report using the startup-loaded decimal style.
///
/// Downstream report consumers require a point decimal separator, so a
/// comma in the formatted output is a hard failure. The default fixture
/// seeds `LOCALE=fr_FR`, which arms exactly that.
#[instrument(skip(state))]
pub async fn generate_report(
    State(state): State<AppState>,
    Query(params): Query<GenerateReportParams>,
) -> Result<String> {
    let formatted = state.report_style().format_amount(params.amount);

    if formatted.contains(',') {
        Err(AppError::ReportFormat(formatted))
    } else {
        Ok(format!("Report: {formatted}"))
    }
}
