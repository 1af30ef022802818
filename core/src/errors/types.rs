//! Specific error types for token handling and request validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("jwt expired")]
    Expired,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("jwt malformed")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token lifetime out of range: {0} seconds")]
    InvalidLifetime(i64),
}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Request field name as sent by the client (e.g. `firstName`)
    pub field: String,
    /// Human-readable reason
    pub message: String,
    /// The value that was checked, after trimming
    pub value: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::Expired.to_string(), "jwt expired");
        assert_eq!(TokenError::Malformed.to_string(), "jwt malformed");
        assert_eq!(
            TokenError::UnsupportedAlgorithm("RS256".into()).to_string(),
            "Unsupported signing algorithm: RS256"
        );
    }

    #[test]
    fn test_field_error_serialization() {
        let error = FieldError::new("email", "E-mail already in use", "a@b.co");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["field"], "email");
        assert_eq!(value["message"], "E-mail already in use");
        assert_eq!(value["value"], "a@b.co");
    }
}
