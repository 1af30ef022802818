//! Main token service implementation

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ud_shared::config::JwtConfig;

use crate::domain::entities::token::TokenClaims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

/// Signs and verifies user tokens with a process-wide shared secret.
///
/// Built once at startup from [`JwtConfig`]; holds no mutable state and is
/// shared between workers behind an `Arc`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    lifetime: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.header.alg)
            .field("lifetime_seconds", &self.lifetime.num_seconds())
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or
    /// * `TokenError::UnsupportedAlgorithm` when the configured algorithm is
    ///   not one of HS256/HS384/HS512
    /// * `TokenError::InvalidLifetime` when the lifetime is not positive or
    ///   does not fit a `chrono::Duration`
    pub fn new(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm)
            .ok()
            .filter(|alg| matches!(alg, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512))
            .ok_or_else(|| TokenError::UnsupportedAlgorithm(config.algorithm.clone()))?;

        let lifetime = Duration::try_seconds(config.expiry_seconds)
            .filter(|lifetime| *lifetime > Duration::zero())
            .ok_or(TokenError::InvalidLifetime(config.expiry_seconds))?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        tracing::debug!(
            algorithm = ?algorithm,
            lifetime_seconds = config.expiry_seconds,
            "Token service initialised"
        );

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(algorithm),
            validation,
            lifetime,
        })
    }

    /// Mints a token embedding the user's id, names and email
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        self.issue_at(user, Utc::now())
    }

    pub(crate) fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = TokenClaims::for_user(user, issued_at, self.lifetime).ok_or_else(|| {
            tracing::error!(lifetime_seconds = self.lifetime.num_seconds(), "Token expiry out of range");
            DomainError::Token(TokenError::GenerationFailed)
        })?;
        encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    /// Verifies a token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is expired, carries a bad signature, or is malformed
    pub fn verify(&self, token: &str) -> Result<TokenClaims, DomainError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed,
                };
                tracing::debug!(error = %e, "Token verification failed");
                DomainError::Token(error)
            })
    }
}
