//! Domain layer containing business entities.

pub mod entities;

pub use entities::{TokenClaims, User, UserView};
