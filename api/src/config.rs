//! Startup configuration for the API server.
//!
//! Sources are layered, later ones winning:
//! 1. built-in defaults for the detected [`Environment`]
//! 2. `config.<environment>.toml` in the working directory, if present
//! 3. `APP__*` variables, e.g. `APP__SERVER__PORT=8080` or `APP__AUTH__JWT__SECRET=...`
//! 4. the plain variables `JWT_SECRET`, `JWT_TIMEOUT_DURATION`, `DATABASE_URL`,
//!    `SERVER_HOST` and `SERVER_PORT`/`PORT`

use ud_shared::config::{AppConfig, Environment, JwtConfig, MAX_TOKEN_EXPIRY_SECONDS};
use ud_shared::duration::parse_duration;

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("JWT_SECRET must be set when running in production")]
    InsecureSecret,
}

/// Immutable configuration handed to the server at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    /// Load from every source, reading the process environment
    ///
    /// Callers run [`Config::check_secret`] once logging is up.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let defaults = AppConfig::for_environment(environment);

        let app: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&defaults)?)
            .add_source(
                config::File::new(environment.config_file(), config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Self::from_app_config(app, |name| std::env::var(name).ok())
    }

    /// Apply the plain environment variables on top of `app`
    ///
    /// `lookup` resolves a variable name to its value.
    pub fn from_app_config<F>(mut app: AppConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            app.auth.jwt.secret = secret;
        }
        if let Some(raw) = lookup("JWT_TIMEOUT_DURATION") {
            app.auth.jwt.expiry_seconds =
                parse_duration(&raw).map_err(|e| ConfigError::InvalidValue {
                    name: "JWT_TIMEOUT_DURATION",
                    reason: e.to_string(),
                })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            app.database.url = url;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            app.server.host = host;
        }
        if let Some(raw) = lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            app.server.port = raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                reason: format!("{} is not a valid port number", raw),
            })?;
        }
        if !app.auth.jwt.has_valid_expiry() {
            return Err(ConfigError::InvalidValue {
                name: "JWT_TIMEOUT_DURATION",
                reason: format!(
                    "{} seconds is outside 1..={}",
                    app.auth.jwt.expiry_seconds, MAX_TOKEN_EXPIRY_SECONDS
                ),
            });
        }

        Ok(Self { app })
    }

    /// Refuse the shipped development secret in production, warn elsewhere
    pub fn check_secret(&self) -> Result<(), ConfigError> {
        if !self.jwt().is_using_default_secret() {
            return Ok(());
        }
        if self.is_production() {
            return Err(ConfigError::InsecureSecret);
        }
        log::warn!("Using the default JWT secret; set JWT_SECRET before deploying");
        Ok(())
    }

    pub fn jwt(&self) -> &JwtConfig {
        &self.app.auth.jwt
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }
}
