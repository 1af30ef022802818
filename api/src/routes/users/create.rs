use actix_web::{web, HttpRequest, HttpResponse};

use ud_core::repositories::UserRepository;
use ud_core::services::user::CreateUserRequest;
use ud_shared::sanitize::mask_email;
use ud_shared::{messages, ApiResponse};

use super::{request_id, AppState};
use crate::handlers::error::ApiError;

/// Handler for POST /users
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "User add Success.",
///     "data": { "id": "...", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "token": "..." }
/// }
/// ```
///
/// ## Validation failure (200 OK)
/// `success: false`, message `"Validation Error."` and the field errors in `data`.
pub async fn create_user<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + 'static,
{
    let request_id = request_id(&req);
    log::info!(
        "[{}] Processing registration for {}",
        request_id,
        mask_email(body.email.trim())
    );

    let registered = state
        .user_service
        .register_user(body.into_inner())
        .await
        .map_err(|e| {
            log::warn!("[{}] Registration failed: {}", request_id, e);
            ApiError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(messages::USER_CREATED, registered)))
}
