//! # User Directory Core
//!
//! Core business logic and domain layer for the user directory backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that the API and infrastructure crates build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{TokenClaims, User, UserView};
pub use errors::{DomainError, DomainResult, FieldError, TokenError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{
    CreateUserRequest, NewUser, RegisteredUser, RegistrationValidator, TokenService, UserLookup,
    UserService,
};
