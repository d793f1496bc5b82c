//! Order identifier construction and shape validation.

use std::sync::LazyLock;

use regex::Regex;

/// An order id is an upper-case alphanumeric prefix, an underscore, and a
/// numeric user id. A lower-case or empty prefix fails the check, which is
/// exactly the misconfiguration the `ORDER_PREFIX` config row can arm.
/// The user id must be ASCII digits; `\d` would also admit other Unicode
/// decimal digits.
static ORDER_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal, verified by tests
    Regex::new(r"^[A-Z0-9]+_[0-9]+$").unwrap()
});

/// Build an order id from the configured prefix and a user id.
#[must_use]
pub fn build(prefix: &str, user_id: &str) -> String {
    format!("{prefix}_{user_id}")
}

/// Whether `id` matches the required order-id shape.
#[must_use]
pub fn is_well_formed(id: &str) -> bool {
    ORDER_ID_PATTERN.is_match(id)
}
