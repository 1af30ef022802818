//! Mapping from domain failures to HTTP responses.
//!
//! Every error leaves the server in the `{ success, message, data? }`
//! envelope. Field validation failures answer `200` with the field list,
//! which is what existing clients of this API expect.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ud_core::errors::DomainError;
use ud_shared::{messages, ApiResponse};

/// Errors returned by handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Protected route called without `x-auth-token`
    #[error("No token")]
    MissingToken,

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    #[error("The requested resource was not found")]
    NotFound,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::OK,
            // Invalid tokens are not 401; clients rely on this
            ApiError::Domain(DomainError::Token(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Domain(DomainError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);

        match self {
            ApiError::MissingToken => builder.json(ApiResponse::failure(messages::NO_TOKEN)),
            ApiError::BadRequest(message) => builder.json(ApiResponse::failure(message.clone())),
            ApiError::NotFound => builder.json(ApiResponse::failure(messages::NOT_FOUND)),
            ApiError::Domain(DomainError::Validation(errors)) => builder.json(
                ApiResponse::failure_with_data(messages::VALIDATION_ERROR, errors),
            ),
            ApiError::Domain(DomainError::Token(e)) => builder.json(ApiResponse::failure(e.to_string())),
            ApiError::Domain(e) => {
                log::error!("Request failed: {}", e);
                builder.json(ApiResponse::failure(messages::INTERNAL_ERROR))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use ud_core::errors::{FieldError, TokenError};

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_rt::test]
    async fn test_missing_token_is_401() {
        let (status, body) = body_json(ApiError::MissingToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "success": false, "message": "No token" }));
    }

    #[actix_rt::test]
    async fn test_validation_is_200_with_fields() {
        let error = DomainError::Validation(vec![FieldError::new(
            "email",
            "E-mail already in use",
            "ada@example.com",
        )]);
        let (status, body) = body_json(error.into()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Validation Error.");
        assert_eq!(body["data"][0]["field"], "email");
    }

    #[actix_rt::test]
    async fn test_token_error_is_500_with_reason() {
        let (status, body) = body_json(DomainError::Token(TokenError::InvalidSignature).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "invalid signature");
    }

    #[actix_rt::test]
    async fn test_database_error_is_not_leaked() {
        let (status, body) = body_json(DomainError::Database("Duplicate entry".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An internal error occurred");
    }
}
