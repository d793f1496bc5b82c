//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `COUPONLAB_DATABASE_URL` - SQLite URL (default: `sqlite://couponlab.db?mode=rwc`)
//! - `COUPONLAB_HOST` - Bind address (default: 127.0.0.1)
//! - `COUPONLAB_PORT` - Listen port (default: 8080)
//!
//! Everything is optional: the service is a local fixture and ships with
//! working defaults. The database file is created on first connect when it
//! does not exist (`mode=rwc`).

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default SQLite URL; `mode=rwc` creates the file when missing.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://couponlab.db?mode=rwc";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = std::env::var("COUPONLAB_DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let host = match std::env::var("COUPONLAB_HOST") {
            Ok(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar("COUPONLAB_HOST", e.to_string()))?,
            Err(_) => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match std::env::var("COUPONLAB_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("COUPONLAB_PORT", e.to_string()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address to bind the HTTP listener to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = AppConfig {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: 9999,
        };
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9999");
    }
}
