//! Seed dataset: built-in defaults and `key=value` fixture file parsing.
//!
//! The original encrypted bootstrap bundle is out of scope; a fixture file
//! here is its decrypted form - plain `key=value` lines. Missing keys fall
//! back to the defaults below, so a fixture file only has to name what it
//! wants to change.
//!
//! The defaults deliberately arm most of the demo traps:
//!
//! - `sys_locale=fr_FR` makes report formatting emit a comma separator,
//! - `login_json` carries `isBanned` as a JSON *string*, not a boolean,
//! - `vip_json` spells the flag `isVIP` where the profile expects `VIP`,
//! - `bank_balance` is negative.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use couponlab_core::CouponStatus;

/// Errors that can occur when loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid coupon_min_amount {value:?}: {message}")]
    InvalidAmount { value: String, message: String },
    #[error("invalid coupon_expiry_date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// The complete seed dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Locale tag stored under the `LOCALE` config key.
    pub sys_locale: String,
    /// Prefix stored under the `ORDER_PREFIX` config key.
    pub order_prefix: String,
    /// `LOGIN` mock payload; also the `upstream_mock` row for [`Fixture::UPSTREAM_USER`].
    pub login_json: String,
    /// `BANK` mock payload. Kept as the raw stored string; parsing to a
    /// balance happens when the bank service loads it.
    pub bank_balance: String,
    /// `VIP` mock payload.
    pub vip_json: String,
    /// Coupon status string, stored verbatim.
    pub coupon_status: String,
    /// Coupon category, stored verbatim.
    pub coupon_category: String,
    pub coupon_min_amount: f64,
    pub coupon_expiry_date: NaiveDate,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            sys_locale: "fr_FR".to_owned(),
            order_prefix: "ORD".to_owned(),
            login_json: r#"{"isBanned": "true"}"#.to_owned(),
            bank_balance: "-500.00".to_owned(),
            vip_json: r#"{"isVIP": true}"#.to_owned(),
            coupon_status: CouponStatus::Active.as_str().to_owned(),
            coupon_category: "FOOD".to_owned(),
            coupon_min_amount: 50.0,
            coupon_expiry_date: NaiveDate::from_ymd_opt(2027, 12, 31)
                .unwrap_or(NaiveDate::MAX),
        }
    }
}

impl Fixture {
    /// Code of the single seeded coupon.
    pub const COUPON_CODE: &'static str = "SUMMER_2024";

    /// User id the login payload is seeded under in `upstream_mock`.
    pub const UPSTREAM_USER: &'static str = "u_992";

    /// Load a fixture from a `key=value` file, over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if the file cannot be read or a numeric or
    /// date value fails to parse.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_lines(&content)
    }

    /// Parse `key=value` lines over the defaults.
    ///
    /// Blank lines and lines starting with `#` are skipped. Keys are
    /// trimmed; values keep everything after the first `=` verbatim.
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError` if a numeric or date value fails to parse.
    pub fn from_lines(content: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::default();

        for line in content.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.to_owned();

            match key.trim() {
                "sys_locale" => fixture.sys_locale = value,
                "order_prefix" => fixture.order_prefix = value,
                "login_json" => fixture.login_json = value,
                "bank_balance" => fixture.bank_balance = value,
                "vip_json" => fixture.vip_json = value,
                "coupon_status" => fixture.coupon_status = value,
                "coupon_category" => fixture.coupon_category = value,
                "coupon_min_amount" => {
                    fixture.coupon_min_amount =
                        value
                            .trim()
                            .parse::<f64>()
                            .map_err(|e| FixtureError::InvalidAmount {
                                value,
                                message: e.to_string(),
                            })?;
                }
                "coupon_expiry_date" => {
                    fixture.coupon_expiry_date = value
                        .trim()
                        .parse::<NaiveDate>()
                        .map_err(|_| FixtureError::InvalidDate { value })?;
                }
                _ => {}
            }
        }

        Ok(fixture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_arm_the_demo_traps() {
        let fixture = Fixture::default();
        assert_eq!(fixture.sys_locale, "fr_FR");
        assert!(fixture.login_json.contains(r#""true""#));
        assert!(fixture.bank_balance.starts_with('-'));
        assert_eq!(fixture.coupon_status, "ACTIVE");
    }

    #[test]
    fn parses_lines_over_defaults() {
        let fixture = Fixture::from_lines(
            "sys_locale=en_US\n\
             coupon_min_amount=75\n\
             coupon_expiry_date=2026-01-01\n",
        )
        .expect("valid fixture");
        assert_eq!(fixture.sys_locale, "en_US");
        assert!((fixture.coupon_min_amount - 75.0).abs() < f64::EPSILON);
        assert_eq!(
            fixture.coupon_expiry_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")
        );
        // Untouched keys keep their defaults.
        assert_eq!(fixture.order_prefix, "ORD");
    }

    #[test]
    fn skips_comments_blanks_and_unknown_keys() {
        let fixture = Fixture::from_lines(
            "# a comment\n\
             \n\
             no_such_key=whatever\n\
             not a key value line\n\
             order_prefix=SHOP\n",
        )
        .expect("valid fixture");
        assert_eq!(fixture.order_prefix, "SHOP");
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let fixture = Fixture::from_lines(r#"login_json={"isBanned": true, "note": "a=b"}"#)
            .expect("valid fixture");
        assert_eq!(fixture.login_json, r#"{"isBanned": true, "note": "a=b"}"#);
    }

    #[test]
    fn rejects_bad_amount_and_date() {
        assert!(matches!(
            Fixture::from_lines("coupon_min_amount=lots"),
            Err(FixtureError::InvalidAmount { .. })
        ));
        assert!(matches!(
            Fixture::from_lines("coupon_expiry_date=31/12/2027"),
            Err(FixtureError::InvalidDate { .. })
        ));
    }
}
