//! Coupon repository for the seeded `coupons` table.

use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use couponlab_core::Coupon;

use super::RepositoryError;

/// Repository for coupon lookups.
pub struct CouponRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CouponRepository<'a> {
    /// Create a new coupon repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a coupon by its code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored expiry date
    /// cannot be read as a date. An unknown code is `Ok(None)`.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Coupon>, RepositoryError> {
        let row = sqlx::query(
            "SELECT code, status, category, min_amount, expiry_date \
             FROM coupons WHERE code = ?1",
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let expiry_date: NaiveDate = r.try_get("expiry_date").map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid expiry_date in coupons: {e}"))
        })?;

        Ok(Some(Coupon {
            code: r.try_get("code")?,
            status: r.try_get("status")?,
            category: r.try_get("category")?,
            min_amount: r.try_get("min_amount")?,
            expiry_date,
        }))
    }
}
