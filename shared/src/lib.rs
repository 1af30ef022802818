//! Shared utilities and common types for the user directory server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The response envelope and client-facing messages
//! - Utility functions (HTML escaping, duration parsing)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use errors::{messages, DurationError};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::{duration, sanitize};
