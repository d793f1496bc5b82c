//! Unified request-level error handling.
//!
//! All route handlers return `Result<T, AppError>`. Responses are plain
//! text, like the rest of the surface. Domain-level "not found" is *not*
//! an error here - handlers answer those with 200 and an error sentence.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the demo server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store access failed (connectivity, missing table, corrupt row).
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// A seeded mock payload is absent or unparseable.
    #[error("mock data error: {0}")]
    MockData(String),

    /// A constructed order id failed the shape check.
    #[error("Format Error: {0}")]
    OrderFormat(String),

    /// A formatted report amount violated the expected format.
    #[error("Invalid Format: {0}")]
    ReportFormat(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Everything here is a server-side fault in a fixture app.
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        // Don't leak store internals; the format errors are the payload.
        let message = match &self {
            Self::Database(_) | Self::MockData(_) => {
                tracing::error!(error = %self, "request error");
                "Internal server error".to_owned()
            }
            Self::OrderFormat(_) | Self::ReportFormat(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
