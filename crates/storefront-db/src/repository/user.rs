//! # User Repository
//!
//! Registered users. Only the password hash is ever stored.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use storefront_core::{NewUser, User};

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Stores a new user.
    ///
    /// ## Errors
    /// - `UniqueViolation` when the username is taken
    pub async fn create(&self, new: NewUser) -> DbResult<User> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?1, ?2)")
            .bind(&new.username)
            .bind(&new.password_hash)
            .execute(&self.pool)
            .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => {
                return Err(match DbError::from(e) {
                    DbError::UniqueViolation { .. } => {
                        DbError::duplicate("username", &new.username)
                    }
                    other => other,
                })
            }
        };

        debug!(id, username = %new.username, "User created");

        Ok(User {
            id,
            username: new.username,
            password_hash: new.password_hash,
        })
    }

    /// Looks up a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Every user, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, username, password_hash FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
