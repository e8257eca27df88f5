//! User records

use serde::Serialize;
use sqlx::FromRow;

use super::{Email, ValidationError};

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored as handed in; hashing happens in the route layer.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: Email,
    password: String,
}

impl NewUser {
    pub fn new(name: &str, email: Email, password: &str) -> Result<Self, ValidationError> {
        ValidationError::require_text("name", name)?;
        ValidationError::require_text("password", password)?;

        Ok(Self {
            name: name.trim().to_owned(),
            email,
            password: password.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::new("eva.stanley@example.com").unwrap()
    }

    #[test]
    fn trims_name_keeps_password() {
        let user = NewUser::new("  Eva Stanley ", email(), " secret ").unwrap();
        assert_eq!(user.name(), "Eva Stanley");
        assert_eq!(user.password(), " secret ");
        assert_eq!(user.email().as_str(), "eva.stanley@example.com");
    }

    #[test]
    fn rejects_blank_name() {
        let err = NewUser::new(" ", email(), "pw").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn rejects_empty_password() {
        let err = NewUser::new("Eva", email(), "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "password" });
    }

    #[test]
    fn password_not_serialized() {
        let user = User {
            id: 1,
            name: "Eva".into(),
            email: "eva@example.com".into(),
            password: "hash".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "eva@example.com");
    }
}
