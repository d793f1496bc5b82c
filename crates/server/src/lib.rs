//! Coupon Lab Server - seeded demo HTTP service.
//!
//! A small axum application over an embedded SQLite store. The store is
//! populated out-of-band by the seeder (`couponlab-cli seed`); the server
//! itself never writes, so request handling needs no locking and no
//! transactions.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`state`] - Shared application state (pool, bank mock, report style)
//! - [`error`] - Request-level error type
//! - [`db`] - Read-only store access and the destructive seeder
//! - [`fixtures`] - Seed dataset (built-in defaults and file parsing)
//! - [`services`] - Explicit mock service implementations
//! - [`routes`] - HTTP handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod routes;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;
