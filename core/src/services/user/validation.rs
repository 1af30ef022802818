//! Registration request validation.
//!
//! Validation runs as an ordered list of [`ValidationStage`]s. Each stage
//! aggregates every error it finds; the pipeline stops at the first stage
//! that reports anything, so the uniqueness lookup never runs on input that
//! already failed the field rules.

use std::sync::Arc;

use ud_shared::sanitize::escape_html;

use crate::errors::{DomainError, FieldError};
use crate::repositories::user::UserRepository;

use super::types::{CreateUserRequest, NewUser};

pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";

pub const EMAIL_IN_USE: &str = "E-mail already in use";

/// Column widths of `users.first_name`/`users.last_name` and `users.email`,
/// measured in characters of the stored (escaped) value
pub const NAME_MAX_CHARS: usize = 255;
pub const EMAIL_MAX_CHARS: usize = 320;

/// One check applied to a trimmed field value
struct FieldRule {
    passes: fn(&str) -> bool,
    message: &'static str,
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn is_alphanumeric(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_email(value: &str) -> bool {
    validator::validate_email(value)
}

fn stored_len(value: &str) -> usize {
    escape_html(value).chars().count()
}

fn fits_name_column(value: &str) -> bool {
    stored_len(value) <= NAME_MAX_CHARS
}

fn fits_email_column(value: &str) -> bool {
    stored_len(value) <= EMAIL_MAX_CHARS
}

const FIRST_NAME_RULES: &[FieldRule] = &[
    FieldRule {
        passes: is_present,
        message: "First name must be specified.",
    },
    FieldRule {
        passes: is_alphanumeric,
        message: "First name has non-alphanumeric characters.",
    },
    FieldRule {
        passes: fits_name_column,
        message: "First name must be at most 255 characters.",
    },
];

const LAST_NAME_RULES: &[FieldRule] = &[
    FieldRule {
        passes: is_present,
        message: "Last name must be specified.",
    },
    FieldRule {
        passes: is_alphanumeric,
        message: "Last name has non-alphanumeric characters.",
    },
    FieldRule {
        passes: fits_name_column,
        message: "Last name must be at most 255 characters.",
    },
];

const EMAIL_RULES: &[FieldRule] = &[
    FieldRule {
        passes: is_present,
        message: "Email must be specified.",
    },
    FieldRule {
        passes: is_email,
        message: "Email must be a valid email address.",
    },
    FieldRule {
        passes: fits_email_column,
        message: "Email must be at most 320 characters.",
    },
];

/// Stages of the registration pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    /// Presence and format of each field; no I/O
    Fields,
    /// Email not already held by a stored user
    EmailUniqueness,
}

impl ValidationStage {
    pub const ORDER: [ValidationStage; 2] = [ValidationStage::Fields, ValidationStage::EmailUniqueness];
}

/// Trimmed view of the request shared by all stages
struct Candidate {
    first_name: String,
    last_name: String,
    email: String,
}

impl Candidate {
    fn from_request(request: &CreateUserRequest) -> Self {
        Self {
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email: request.email.trim().to_string(),
        }
    }

    fn escaped(&self) -> NewUser {
        NewUser {
            first_name: escape_html(&self.first_name),
            last_name: escape_html(&self.last_name),
            email: escape_html(&self.email),
        }
    }
}

/// Validates registration requests against the field rules and the store
pub struct RegistrationValidator<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> RegistrationValidator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Run every stage in order
    ///
    /// # Returns
    /// * `Ok(NewUser)` - All stages passed; fields are trimmed and HTML-escaped
    /// * `Err(DomainError::Validation)` - Field errors of the first failing stage
    /// * `Err(DomainError::Database)` - The uniqueness lookup itself failed
    pub async fn validate(&self, request: &CreateUserRequest) -> Result<NewUser, DomainError> {
        let candidate = Candidate::from_request(request);
        let new_user = candidate.escaped();

        for stage in ValidationStage::ORDER {
            let errors = match stage {
                ValidationStage::Fields => check_fields(&candidate),
                ValidationStage::EmailUniqueness => self.check_email_unique(&new_user.email).await?,
            };

            if !errors.is_empty() {
                tracing::debug!(stage = ?stage, errors = errors.len(), "Registration rejected");
                return Err(DomainError::Validation(errors));
            }
        }

        Ok(new_user)
    }

    async fn check_email_unique(&self, email: &str) -> Result<Vec<FieldError>, DomainError> {
        if self.repository.exists_by_email(email).await? {
            return Ok(vec![FieldError::new(FIELD_EMAIL, EMAIL_IN_USE, email)]);
        }
        Ok(Vec::new())
    }
}

fn check_fields(candidate: &Candidate) -> Vec<FieldError> {
    [
        (FIELD_FIRST_NAME, candidate.first_name.as_str(), FIRST_NAME_RULES),
        (FIELD_LAST_NAME, candidate.last_name.as_str(), LAST_NAME_RULES),
        (FIELD_EMAIL, candidate.email.as_str(), EMAIL_RULES),
    ]
    .into_iter()
    .filter_map(|(field, value, rules)| {
        rules
            .iter()
            .find(|rule| !(rule.passes)(value))
            .map(|rule| FieldError::new(field, rule.message, value))
    })
    .collect()
}
