use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use ud_core::domain::entities::user::UserView;
use ud_core::repositories::UserRepository;
use ud_core::services::user::UserLookup;
use ud_shared::types::response::OPERATION_SUCCESS;
use ud_shared::ApiResponse;

use super::{request_id, AppState};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;

/// `data` of a lookup: the user, or `{}` when there is none
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserDetail {
    Found(UserView),
    Empty(EmptyObject),
}

#[derive(Debug, Serialize)]
pub struct EmptyObject {}

impl From<UserLookup> for UserDetail {
    fn from(lookup: UserLookup) -> Self {
        match lookup.into_user() {
            Some(user) => UserDetail::Found(user.into()),
            None => UserDetail::Empty(EmptyObject {}),
        }
    }
}

/// Handler for GET /users/{id}
///
/// Unknown and malformed identifiers both answer `200` with `data: {}`.
pub async fn get_user<R>(
    req: HttpRequest,
    _caller: AuthenticatedUser,
    state: web::Data<AppState<R>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + 'static,
{
    let raw_id = path.into_inner();
    let lookup = state.user_service.find_user(&raw_id).await?;

    match &lookup {
        UserLookup::Found(_) => {}
        UserLookup::NotFound => log::info!("[{}] No user with id {}", request_id(&req), raw_id),
        UserLookup::InvalidId => log::info!("[{}] Malformed user id {:?}", request_id(&req), raw_id),
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        OPERATION_SUCCESS,
        UserDetail::from(lookup),
    )))
}
