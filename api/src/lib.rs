// Library exports for the binary and integration tests

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
