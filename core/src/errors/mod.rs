//! Domain-specific error types and error handling.

mod types;

pub use types::{FieldError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Request rejected before reaching persistence
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Persistence failure; cause deliberately unclassified
    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            DomainError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_counts_fields() {
        let error = DomainError::Validation(vec![
            FieldError::new("firstName", "First name must be specified.", ""),
            FieldError::new("email", "Email must be specified.", ""),
        ]);
        assert_eq!(error.to_string(), "Validation failed for 2 field(s)");
        assert_eq!(error.field_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_token_error_is_transparent() {
        let error: DomainError = TokenError::InvalidSignature.into();
        assert_eq!(error.to_string(), "invalid signature");
        assert!(error.field_errors().is_none());
    }
}
