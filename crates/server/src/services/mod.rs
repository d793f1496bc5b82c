//! Explicit mock service implementations.
//!
//! Where the original design would reach for dynamic proxies, these are
//! plain traits with compile-time-known implementations whose behavior is
//! fixed by the seeded data.

pub mod bank;

pub use bank::{BankService, SeededBank};
