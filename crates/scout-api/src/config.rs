//! API server configuration loaded from environment variables.

use std::env;

use thiserror::Error;

/// Errors during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    Missing(String),
    /// An environment variable holds an unrecognised value.
    #[error("invalid value for {var}: {value}")]
    Invalid {
        /// The offending variable.
        var: String,
        /// The value found.
        value: String,
    },
}

/// Which storage backs the company and talent directories.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// Seeded in-memory directories; state is lost on shutdown.
    Memory,
    /// `PostgreSQL` directories at the given connection URL.
    Postgres(String),
}

/// API server runtime configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// TCP address to bind (e.g. `0.0.0.0:8080`).
    pub bind_addr: String,
    /// Selected storage backend.
    pub backend: StoreBackend,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `BIND_ADDR` defaults to `0.0.0.0:8080`. `STORE_BACKEND` selects
    /// `memory` (default) or `postgres`; the latter requires
    /// `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown `STORE_BACKEND`
    /// and [`ConfigError::Missing`] if the postgres backend is selected
    /// without `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
        let backend = match env::var("STORE_BACKEND").as_deref() {
            Err(_) | Ok("memory") => StoreBackend::Memory,
            Ok("postgres") => {
                let url = env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::Missing("DATABASE_URL".to_owned()))?;
                StoreBackend::Postgres(url)
            }
            Ok(other) => {
                return Err(ConfigError::Invalid {
                    var: "STORE_BACKEND".to_owned(),
                    value: other.to_owned(),
                })
            }
        };
        Ok(Self { bind_addr, backend })
    }
}
