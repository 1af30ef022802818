//! Repository interfaces for persistence, implemented by the infrastructure layer.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
