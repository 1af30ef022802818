//! Token service module for JWT management
//!
//! Issues the HS-family JWT handed out at registration and verifies the
//! bearer credential presented on protected routes.

mod service;


pub use service::TokenService;
