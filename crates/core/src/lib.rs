//! Coupon Lab Core - Shared types and pure logic.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no database
//! access, no HTTP, no clocks. Callers pass in "today" explicitly, which
//! keeps every predicate here deterministic and unit-testable.
//!
//! # Modules
//!
//! - [`types`] - Coupon records and status values
//! - [`validation`] - The multi-condition coupon predicate and its trace
//! - [`locale`] - Locale-derived decimal formatting for reports
//! - [`order_id`] - Order identifier construction and shape checks
//! - [`payloads`] - Deserialization of the canned upstream JSON payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod locale;
pub mod order_id;
pub mod payloads;
pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{ConditionCheck, Verdict, evaluate, normalize};
