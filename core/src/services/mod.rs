//! Business services containing domain logic and use cases.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::TokenService;
pub use user::{
    CreateUserRequest, NewUser, RegisteredUser, RegistrationValidator, UserLookup, UserService,
};
