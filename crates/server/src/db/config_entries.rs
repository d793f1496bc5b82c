//! Key/value configuration store (`sys_config`).

use sqlx::{Row, SqlitePool};

use super::RepositoryError;

/// Get a configuration value by key.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails. A missing key
/// is `Ok(None)`.
pub async fn get_value(pool: &SqlitePool, key: &str) -> Result<Option<String>, RepositoryError> {
    let row = sqlx::query("SELECT config_value FROM sys_config WHERE config_key = ?1")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(r) => Ok(Some(r.try_get("config_value")?)),
        None => Ok(None),
    }
}
