//! Shared record types for the seeded stores.

mod coupon;

pub use coupon::{Coupon, CouponStatus};
