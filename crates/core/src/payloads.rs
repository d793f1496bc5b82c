//! Deserialization of the canned upstream JSON payloads.
//!
//! Each helper models a known deserialization trap on purpose. The seeded
//! payloads are free to arm or disarm the trap; the parsing rules here stay
//! fixed so the resulting behavior is reproducible.

use serde::Deserialize;
use serde_json::Value;

/// VIP profile payload.
///
/// The flag is read from a field literally named `VIP`. Upstream systems
/// commonly emit `isVIP` instead, which deserializes cleanly (unknown
/// fields are ignored) but leaves `vip` at its `false` default - the
/// field-naming trap this fixture demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VipProfile {
    #[serde(rename = "VIP", default)]
    pub vip: bool,
}

impl VipProfile {
    /// Parse a VIP payload.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when `json` is not valid JSON.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Whether a login payload marks the user as banned.
///
/// Only a JSON boolean `true` under `isBanned` counts. A string `"true"`,
/// a number, or a missing field all read as not banned - the
/// boolean-deserialization trap.
///
/// # Errors
///
/// Returns the underlying error when `json` is not valid JSON.
pub fn login_is_banned(json: &str) -> Result<bool, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    Ok(value
        .get("isBanned")
        .and_then(Value::as_bool)
        .unwrap_or(false))
}
