//! Type-keyed mock payload store (`mocks`).

use sqlx::{Row, SqlitePool};

use super::RepositoryError;

/// Get the canned JSON payload for a mock type (`BANK`, `LOGIN`, `VIP`).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails. An unseeded
/// type is `Ok(None)`.
pub async fn get_mock_json(
    pool: &SqlitePool,
    kind: &str,
) -> Result<Option<String>, RepositoryError> {
    let row = sqlx::query("SELECT json FROM mocks WHERE type = ?1")
        .bind(kind)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(r) => Ok(Some(r.try_get("json")?)),
        None => Ok(None),
    }
}
