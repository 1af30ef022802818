//! User route handlers
//!
//! - `GET /users` - list every user (token required)
//! - `GET /users/{id}` - fetch one user (token required)
//! - `POST /users` - register a user and issue a token

pub mod create;
pub mod get;
pub mod list;

use actix_web::HttpRequest;
use std::sync::Arc;
use uuid::Uuid;

use ud_core::repositories::UserRepository;
use ud_core::services::token::TokenService;
use ud_core::services::user::UserService;

pub use create::create_user;
pub use get::get_user;
pub use list::list_users;

/// Application state that holds shared services
pub struct AppState<R>
where
    R: UserRepository,
{
    pub user_service: Arc<UserService<R>>,
    pub token_service: Arc<TokenService>,
}

impl<R: UserRepository> AppState<R> {
    /// Wire the services around a repository
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository, Arc::clone(&token_service))),
            token_service,
        }
    }
}

/// Caller-supplied `x-request-id`, or a fresh one for log correlation
pub(crate) fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
