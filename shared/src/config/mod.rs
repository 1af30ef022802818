//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing secret and token lifetime
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let cors = if environment.is_production() {
            CorsConfig::default()
        } else {
            CorsConfig::development()
        };
        let server = if environment.is_production() {
            ServerConfig::new("0.0.0.0", 3000)
        } else {
            ServerConfig::default()
        };

        Self {
            environment,
            server,
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            cors,
            logging: LoggingConfig::for_environment(environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_baseline_is_restrictive() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_development_baseline_is_permissive() {
        let config = AppConfig::for_environment(Environment::Development);
        assert!(config.cors.allows_any_origin());
    }
}
