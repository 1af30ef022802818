//! # Infrastructure Layer
//!
//! Concrete persistence for the user directory: a MySQL connection pool
//! built with SQLx, the bundled schema migrations, and the
//! [`UserRepository`](ud_core::repositories::UserRepository) implementation
//! the API runs against.

// Re-export core types for convenience
pub use ud_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
