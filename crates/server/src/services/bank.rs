//! Mock bank service backed by the seeded `BANK` payload.

use sqlx::SqlitePool;
use tracing::info;

use crate::db::{self, RepositoryError};

/// Balance lookup, as an explicit seam instead of runtime indirection.
pub trait BankService: Send + Sync {
    /// Current account balance.
    fn check_balance(&self) -> f64;
}

/// A bank whose balance was read once from the store at startup.
///
/// Always answers with the seeded value; the default fixture seeds a
/// negative balance so transfers are refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededBank {
    balance: f64,
}

impl SeededBank {
    /// Create a bank with a fixed balance.
    #[must_use]
    pub const fn new(balance: f64) -> Self {
        Self { balance }
    }

    /// Load the balance from the `BANK` mock row.
    ///
    /// A missing row reads as a zero balance, matching the unseeded-store
    /// behavior of the rest of the fixture.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a payload is present
    /// but does not parse as a number.
    pub async fn from_store(pool: &SqlitePool) -> Result<Self, RepositoryError> {
        let balance = match db::mocks::get_mock_json(pool, "BANK").await? {
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| {
                RepositoryError::DataCorruption(format!("BANK mock is not a number: {e}"))
            })?,
            None => 0.0,
        };
        info!(balance, "bank mock loaded");
        Ok(Self::new(balance))
    }
}

impl BankService for SeededBank {
    fn check_balance(&self) -> f64 {
        self.balance
    }
}
