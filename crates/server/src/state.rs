//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{info, warn};

use couponlab_core::locale::DecimalStyle;

use crate::config::AppConfig;
use crate::db;
use crate::services::{BankService, SeededBank};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is read-only after
/// [`AppState::initialize`], so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: SqlitePool,
    report_style: DecimalStyle,
    bank: Arc<dyn BankService>,
}

impl AppState {
    /// Build the state, performing the two startup reads: the `LOCALE`
    /// config row (report decimal style) and the `BANK` mock (balance).
    ///
    /// An unseeded or unreadable store is tolerated: each read falls back
    /// to its default with a warning, and the endpoints later surface the
    /// missing data themselves.
    pub async fn initialize(config: AppConfig, pool: SqlitePool) -> Self {
        let report_style = match db::config_entries::get_value(&pool, "LOCALE").await {
            Ok(Some(tag)) => {
                let style = DecimalStyle::for_locale(&tag);
                info!(locale = %tag, ?style, "report style loaded");
                style
            }
            Ok(None) => {
                info!("no LOCALE config row, using default report style");
                DecimalStyle::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load LOCALE, using default report style");
                DecimalStyle::default()
            }
        };

        let bank: Arc<dyn BankService> = match SeededBank::from_store(&pool).await {
            Ok(bank) => Arc::new(bank),
            Err(e) => {
                warn!(error = %e, "failed to load BANK mock, using zero balance");
                Arc::new(SeededBank::new(0.0))
            }
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                report_style,
                bank,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Decimal style used by report formatting.
    #[must_use]
    pub fn report_style(&self) -> DecimalStyle {
        self.inner.report_style
    }

    /// Get the bank service mock.
    #[must_use]
    pub fn bank(&self) -> &dyn BankService {
        self.inner.bank.as_ref()
    }
}
