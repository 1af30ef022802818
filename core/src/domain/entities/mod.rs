//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::TokenClaims;
pub use user::{User, UserView};
