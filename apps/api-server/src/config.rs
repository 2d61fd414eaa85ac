//! Application configuration loaded from environment variables.

use std::env;

use cadence_infra::database::DatabaseConfig;
use cadence_infra::generator::{GeneratorConfig, GeneratorConfigError};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The generator endpoints are required; a missing DATABASE_URL falls
    /// back to the in-memory store at state-building time.
    pub fn from_env() -> Result<Self, GeneratorConfigError> {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            generator: GeneratorConfig::from_env()?,
        })
    }
}
