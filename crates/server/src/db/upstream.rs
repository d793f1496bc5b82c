//! Per-user canned upstream responses (`upstream_mock`).

use sqlx::{Row, SqlitePool};

use super::RepositoryError;

/// Get the canned upstream response for a user.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails. An unknown
/// user is `Ok(None)`.
pub async fn get_response(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<String>, RepositoryError> {
    let row = sqlx::query("SELECT json_response FROM upstream_mock WHERE user_id = ?1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(r) => Ok(Some(r.try_get("json_response")?)),
        None => Ok(None),
    }
}
