//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Secret shipped for local development only
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default token lifetime in seconds (2 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7200;

/// Longest accepted token lifetime in seconds (one year)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 365 * 86_400;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify tokens
    pub secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: i64,

    /// Algorithm for JWT signing (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in seconds
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.expiry_seconds = seconds;
        self
    }

    /// Whether the lifetime is positive and at most [`MAX_TOKEN_EXPIRY_SECONDS`]
    pub fn has_valid_expiry(&self) -> bool {
        (1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&self.expiry_seconds)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_expiry_seconds() -> i64 {
    DEFAULT_TOKEN_EXPIRY_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.expiry_seconds, 7200);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_seconds(1800);

        assert_eq!(config.expiry_seconds, 1800);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_expiry_bounds() {
        assert!(JwtConfig::default().has_valid_expiry());
        assert!(JwtConfig::new("s").with_expiry_seconds(MAX_TOKEN_EXPIRY_SECONDS).has_valid_expiry());
        assert!(!JwtConfig::new("s").with_expiry_seconds(MAX_TOKEN_EXPIRY_SECONDS + 1).has_valid_expiry());
        assert!(!JwtConfig::new("s").with_expiry_seconds(0).has_valid_expiry());
        assert!(!JwtConfig::new("s").with_expiry_seconds(-1).has_valid_expiry());
    }

    #[test]
    fn test_jwt_config_deserialize_fills_defaults() {
        let config: JwtConfig = serde_json::from_str(r#"{"secret":"abc"}"#).unwrap();
        assert_eq!(config.secret, "abc");
        assert_eq!(config.expiry_seconds, DEFAULT_TOKEN_EXPIRY_SECONDS);
        assert_eq!(config.algorithm, "HS256");
    }
}
