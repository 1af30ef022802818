use actix_web::{web, HttpRequest, HttpResponse};

use ud_core::domain::entities::user::UserView;
use ud_core::repositories::UserRepository;
use ud_shared::types::response::OPERATION_SUCCESS;
use ud_shared::ApiResponse;

use super::{request_id, AppState};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;

/// Handler for GET /users
///
/// An empty store answers with an empty `data` array.
pub async fn list_users<R>(
    req: HttpRequest,
    caller: AuthenticatedUser,
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + 'static,
{
    let request_id = request_id(&req);
    log::info!("[{}] Listing users for {}", request_id, caller.user_id);

    let users: Vec<UserView> = state
        .user_service
        .list_users()
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(OPERATION_SUCCESS, users)))
}
