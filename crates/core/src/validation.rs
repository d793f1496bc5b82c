//! The multi-condition coupon validation predicate.
//!
//! This is the one piece of real business logic in the whole fixture: a
//! coupon applies only when *all four* conditions hold. Each condition is
//! evaluated unconditionally so the [`Verdict`] always carries the full
//! trace, even once a condition has already failed.

use chrono::NaiveDate;

use crate::types::{Coupon, CouponStatus};

/// Outcome of a single validation condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionCheck {
    /// Stable condition name, usable as a log field.
    pub name: &'static str,
    pub passed: bool,
    /// Human-readable comparison detail for the debug trace.
    pub detail: String,
}

/// Result of evaluating a coupon against a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub approved: bool,
    /// `"ok"` when approved, otherwise the name of the first failing
    /// condition in evaluation order.
    pub reason: String,
    /// Every condition, in evaluation order, pass or fail.
    pub checks: Vec<ConditionCheck>,
}

impl Verdict {
    /// Look up a condition by name.
    #[must_use]
    pub fn check(&self, name: &str) -> Option<&ConditionCheck> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// Evaluate `coupon` against the request parameters.
///
/// Approved iff all of:
/// 1. stored status is exactly `"ACTIVE"` (case-sensitive),
/// 2. the expiry date is strictly after `today`,
/// 3. `request_amount` is at least the coupon's minimum amount,
/// 4. `request_category` equals the stored category byte-for-byte.
///
/// Condition 4 intentionally performs no whitespace or unicode
/// normalization; the debug endpoint exposes the normalized comparison
/// side by side so the mismatch is observable.
#[must_use]
pub fn evaluate(
    coupon: &Coupon,
    request_category: &str,
    request_amount: f64,
    today: NaiveDate,
) -> Verdict {
    let checks = vec![
        ConditionCheck {
            name: "status_active",
            passed: coupon.status == CouponStatus::Active.as_str(),
            detail: format!("status is {:?}", coupon.status),
        },
        ConditionCheck {
            name: "not_expired",
            passed: coupon.expiry_date > today,
            detail: format!("expires {} (today {today})", coupon.expiry_date),
        },
        ConditionCheck {
            name: "amount_valid",
            passed: request_amount >= coupon.min_amount,
            detail: format!("amount {request_amount} vs minimum {}", coupon.min_amount),
        },
        ConditionCheck {
            name: "category_match",
            passed: request_category == coupon.category,
            detail: format!(
                "requested {request_category:?} vs stored {:?}",
                coupon.category
            ),
        },
    ];

    let approved = checks.iter().all(|c| c.passed);
    let reason = checks
        .iter()
        .find(|c| !c.passed)
        .map_or_else(|| "ok".to_owned(), |c| c.name.to_owned());

    Verdict {
        approved,
        reason,
        checks,
    }
}

/// Strip everything outside printable ASCII and trim whitespace.
///
/// Used only by the debug trace to show what a normalized category
/// comparison *would* have concluded; the real predicate never calls this.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| (' '..='~').contains(c))
        .collect::<String>()
        .trim()
        .to_owned()
}
