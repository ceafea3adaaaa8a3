//! Registration and login.
//!
//! ## Login Flow
//! ```text
//! credentials ──► find_by_username ──► verify_password ──► generate_access_token
//!                       │                     │
//!                       └── None ──┐          └── mismatch ──┐
//!                                  ▼                         ▼
//!                              Rejected                  Rejected
//! ```
//!
//! Unknown user and wrong password produce the same outcome. Argon2 work runs
//! on the blocking thread pool.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_core::validation::Validate;
use storefront_core::{CoreError, Credentials, EntityId, NewUser, User};
use storefront_db::UserRepository;
use tracing::{info, warn};

use crate::auth::{hash_password_blocking, verify_password_blocking, JwtManager};
use crate::error::{ApiResult, ErrorCode};

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: EntityId,
    pub username: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            username: user.username,
        }
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(String),
    Rejected,
}

/// Authentication service.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(users: UserRepository, jwt: Arc<JwtManager>) -> Self {
        AuthService { users, jwt }
    }

    /// Stores a new user with a hashed password.
    ///
    /// ## Errors
    /// - Validation error when username or password is empty
    /// - Conflict when the username is taken
    pub async fn register(&self, credentials: Credentials) -> ApiResult<UserDto> {
        credentials.validate()?;

        let password_hash = hash_password_blocking(credentials.password).await?;
        let user = self
            .users
            .create(NewUser {
                username: credentials.username,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user.into())
    }

    /// Returns the stored user when the password verifies.
    ///
    /// ## Errors
    /// - `CoreError::InvalidCredentials` (401) for an unknown user or a wrong
    ///   password alike
    pub async fn authenticate(&self, credentials: &Credentials) -> ApiResult<User> {
        let user = match self.users.find_by_username(&credentials.username).await? {
            Some(user) => user,
            None => {
                warn!(username = %credentials.username, "Login for unknown user");
                return Err(CoreError::InvalidCredentials.into());
            }
        };

        let verified =
            verify_password_blocking(credentials.password.clone(), user.password_hash.clone())
                .await;
        if !verified {
            warn!(username = %user.username, "Login with wrong password");
            return Err(CoreError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Issues a token when the credentials match a stored user.
    pub async fn login(&self, credentials: Credentials) -> ApiResult<LoginOutcome> {
        let user = match self.authenticate(&credentials).await {
            Ok(user) => user,
            Err(e) if e.code == ErrorCode::Unauthorized => return Ok(LoginOutcome::Rejected),
            Err(e) => return Err(e),
        };

        let token = self.jwt.generate_access_token(&user.username)?;

        info!(username = %user.username, "Token issued");
        Ok(LoginOutcome::Authenticated(token))
    }

    /// Every registered user, without password hashes.
    pub async fn list_users(&self) -> ApiResult<Vec<UserDto>> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}
