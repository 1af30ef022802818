//! User use cases: list, lookup and registration

use std::sync::Arc;

use ud_shared::sanitize::mask_email;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::UserRepository;
use crate::services::token::TokenService;

use super::types::{CreateUserRequest, RegisteredUser, UserLookup};
use super::validation::RegistrationValidator;

/// User service orchestrating validation, persistence and token minting
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    validator: RegistrationValidator<R>,
    token_service: Arc<TokenService>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self {
            validator: RegistrationValidator::new(Arc::clone(&repository)),
            repository,
            token_service,
        }
    }

    /// All stored users in insertion order
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.repository.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Whether the user store currently answers
    pub async fn store_reachable(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "User store unreachable");
                false
            }
        }
    }

    /// Look a user up by the identifier taken from the request path
    ///
    /// Identifiers that do not parse as a UUID never reach the repository.
    pub async fn find_user(&self, raw_id: &str) -> Result<UserLookup, DomainError> {
        let id = match Uuid::parse_str(raw_id.trim()) {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!(raw_id = %raw_id, "Rejected malformed user id");
                return Ok(UserLookup::InvalidId);
            }
        };

        Ok(match self.repository.find_by_id(id).await? {
            Some(user) => UserLookup::Found(user),
            None => UserLookup::NotFound,
        })
    }

    /// Validate, persist and issue a token for a new user
    ///
    /// Exactly one insert is attempted once validation has passed. A
    /// concurrent registration of the same email that slips between the
    /// uniqueness check and the insert is rejected by the store and
    /// surfaces as `DomainError::Database`.
    #[tracing::instrument(skip_all)]
    pub async fn register_user(&self, request: CreateUserRequest) -> Result<RegisteredUser, DomainError> {
        let new_user = self.validator.validate(&request).await?;

        let user = self.repository.create(new_user.into_user()).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist user");
            e
        })?;

        let token = self.token_service.issue(&user)?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            "User registered"
        );

        Ok(RegisteredUser::new(user, token))
    }
}
