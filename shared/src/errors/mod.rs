//! Shared error types and client-facing messages

use thiserror::Error;

/// Failure to interpret a human-written duration such as `"2h"`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("Duration is empty")]
    Empty,

    #[error("Unrecognized duration: {0}")]
    Invalid(String),

    #[error("Duration out of range: {0}")]
    Overflow(String),
}

/// Messages returned in the `message` field of the response envelope
pub mod messages {
    pub const NO_TOKEN: &str = "No token";
    pub const VALIDATION_ERROR: &str = "Validation Error.";
    pub const USER_CREATED: &str = "User add Success.";
    pub const NOT_FOUND: &str = "The requested resource was not found";
    pub const INVALID_BODY: &str = "Request body could not be parsed";
    pub const INTERNAL_ERROR: &str = "An internal error occurred";
}
