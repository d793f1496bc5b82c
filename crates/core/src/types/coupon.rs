//! Coupon record and status types.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A coupon row as seeded into the store.
///
/// `status` is kept as a raw string rather than a [`CouponStatus`]: the
/// store holds whatever the fixture put there, and the validation predicate
/// compares it byte-for-byte against `"ACTIVE"`. Parsing it into an enum at
/// the read boundary would silently repair exactly the kind of dirty data
/// this fixture exists to demonstrate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique coupon code (e.g. `SUMMER_2024`).
    pub code: String,
    /// Raw status string from the store.
    pub status: String,
    /// Product category the coupon applies to.
    pub category: String,
    /// Minimum purchase amount required to apply the coupon.
    pub min_amount: f64,
    /// Last day the coupon is live. The coupon is rejected on this day.
    pub expiry_date: NaiveDate,
}

/// Well-known coupon status values, used for seeding defaults. Stored
/// statuses are never parsed back into this enum; the predicate compares
/// the raw string against [`CouponStatus::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    Active,
    Expired,
    Suspended,
}

impl CouponStatus {
    /// Returns the exact string stored for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
