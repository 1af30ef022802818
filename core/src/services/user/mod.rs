//! User service module

mod service;
mod types;
pub mod validation;


pub use service::UserService;
pub use types::{CreateUserRequest, NewUser, RegisteredUser, UserLookup};
pub use validation::{RegistrationValidator, ValidationStage};
