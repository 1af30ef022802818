//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and every method reports failures as
//! [`DomainError`], so callers never see driver-specific errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use ud_core::repositories::UserRepository;
/// use ud_core::domain::entities::user::User;
/// use ud_core::errors::DomainError;
///
/// struct PostgresUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn find_all(&self) -> Result<Vec<User>, DomainError> {
///         Ok(Vec::new())
///     }
///
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn create(&self, user: User) -> Result<User, DomainError> {
///         Ok(user)
///     }
///
///     async fn ping(&self) -> Result<(), DomainError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user, oldest first
    ///
    /// # Returns
    /// * `Ok(Vec<User>)` - Possibly empty list of users
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check whether any user already holds `email` (exact match)
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Insert failed, including a duplicate email
    ///   rejected by the store's own uniqueness constraint
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Round-trip to the store without touching user data
    async fn ping(&self) -> Result<(), DomainError>;
}
