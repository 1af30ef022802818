//! Token authentication middleware for protecting API endpoints.
//!
//! The middleware reads the raw token from the `x-auth-token` header,
//! verifies it with the shared [`TokenService`] and injects the decoded
//! identity into the request extensions, where handlers pick it up through
//! the [`AuthenticatedUser`] extractor.
//!
//! A request without a token is answered with `401`. A token that fails
//! verification is answered with the generic `500` error envelope carrying
//! the verifier's reason.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use ud_core::{
    domain::entities::token::TokenClaims,
    errors::{DomainError, TokenError},
    services::token::TokenService,
};
use uuid::Uuid;

use crate::handlers::error::ApiError;

/// Header carrying the raw token (no `Bearer` prefix)
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Identity of the caller, decoded from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates the identity from verified claims
    pub fn from_claims(claims: TokenClaims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::Malformed))?;
        Ok(Self {
            user_id,
            first_name: claims.first_name,
            last_name: claims.last_name,
            email: claims.email,
        })
    }
}

/// Token authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_token(&req) {
                Ok(token) => token,
                Err(e) => {
                    log::warn!("Rejected {} {}: {}", req.method(), req.path(), e);
                    return Ok(reject(req, e));
                }
            };

            let user = match token_service
                .verify(&token)
                .and_then(AuthenticatedUser::from_claims)
            {
                Ok(user) => user,
                Err(e) => {
                    log::warn!("Rejected {} {}: {}", req.method(), req.path(), e);
                    return Ok(reject(req, ApiError::Domain(e)));
                }
            };

            log::debug!("Authenticated user {}", user.user_id);
            req.extensions_mut().insert(user);

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
    req.into_response(error.error_response()).map_into_right_body()
}

/// Reads the token header
///
/// Absent or blank is `MissingToken`; a value that is not visible ASCII
/// counts as a malformed token.
fn extract_token(req: &ServiceRequest) -> Result<String, ApiError> {
    let value = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .ok_or(ApiError::MissingToken)?;
    let token = value
        .to_str()
        .map_err(|_| ApiError::Domain(DomainError::Token(TokenError::Malformed)))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::MissingToken);
    }
    Ok(token.to_string())
}

/// Extractor for the authenticated caller; `401` when the middleware did not run
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| Error::from(ApiError::MissingToken));

        ready(result)
    }
}
