//! Database module - MySQL implementations using SQLx
//!
//! Connection pool management, bundled migrations and the MySQL user
//! repository.

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
