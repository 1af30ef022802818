//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`]. The state is
//! created once at startup and shared by every worker.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse, ResponseError,
};
use chrono::Utc;

use ud_core::repositories::UserRepository;
use ud_shared::config::AppConfig;
use ud_shared::{messages, HealthResponse, HealthStatus};

use crate::handlers::error::ApiError;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::users::{create_user, get_user, list_users};

pub use crate::routes::users::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: UserRepository + 'static,
{
    let auth = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .app_data(json_config(config.server.max_payload_size))
        // Registration order: CORS wraps the logger
        .wrap(Logger::default())
        .wrap(create_cors(&config.cors))
        .route("/health", web::get().to(health_check::<R>))
        .service(
            web::resource("/users")
                .route(web::get().to(list_users::<R>).wrap(auth.clone()))
                .route(web::post().to(create_user::<R>)),
        )
        .service(
            web::resource("/users/{id}").route(web::get().to(get_user::<R>).wrap(auth)),
        )
        .default_service(web::route().to(not_found))
}

/// Malformed JSON bodies answer `400` with the standard envelope
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
            ApiError::BadRequest(messages::INVALID_BODY.to_string()).into()
        })
}

/// Health check endpoint handler; `503` when the user store does not answer
async fn health_check<R: UserRepository>(state: web::Data<AppState<R>>) -> HttpResponse {
    let (status, mut builder) = if state.user_service.store_reachable().await {
        (HealthStatus::Healthy, HttpResponse::Ok())
    } else {
        (HealthStatus::Degraded, HttpResponse::ServiceUnavailable())
    };

    builder.json(HealthResponse {
        status,
        service: "user-directory-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ApiError::NotFound.error_response()
}
