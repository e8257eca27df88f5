//! User repository
//!
//! Lookups for login/session flows and sign-up inserts.

use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::{Email, NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by exact email match.
    ///
    /// Returns `Ok(None)` when no user has that email; login treats that as a
    /// failed attempt rather than an error.
    pub async fn find_by_email(&self, email: &Email) -> DbResult<Option<User>> {
        tracing::debug!(email = %email, "looking up user by email");

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// Get a user by id.
    pub async fn get(&self, id: i32) -> DbResult<User> {
        tracing::debug!(id, "looking up user by id");

        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Insert a user and return the stored row.
    ///
    /// A duplicate email fails with [`DbError::Conflict`].
    pub async fn create(&self, user: NewUser) -> DbResult<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user.name())
        .bind(user.email().as_str())
        .bind(user.password())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = created.id, email = %created.email, "created user");
        Ok(created)
    }
}
