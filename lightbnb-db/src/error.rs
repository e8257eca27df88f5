//! Error types for lightbnb-db

use thiserror::Error;

use crate::models::ValidationError;

pub type DbResult<T> = Result<T, DbError>;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        // Unique constraints (users.email) surface as conflicts, not opaque failures
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(db_err.message().to_owned());
            }
        }
        Self::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("user", 42);
        assert_eq!(err.to_string(), "not found: user '42'");
    }

    #[test]
    fn row_not_found_stays_sqlx() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn validation_converts() {
        let err: DbError = ValidationError::Empty { field: "name" }.into();
        assert_eq!(err.to_string(), "invalid input: name cannot be empty");
    }
}
