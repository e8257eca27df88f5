//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field below its allowed minimum
    Negative { field: &'static str, value: i64 },

    /// Count that must be at least one
    NotPositive { field: &'static str, value: i64 },
}

impl ValidationError {
    /// Reject empty or whitespace-only text.
    pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::Empty { field });
        }
        Ok(())
    }

    pub(crate) fn require_non_negative(field: &'static str, value: i32) -> Result<(), Self> {
        if value < 0 {
            return Err(Self::Negative {
                field,
                value: value.into(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Negative { field, value } => {
                write!(f, "{} cannot be negative (got {})", field, value)
            }
            Self::NotPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "email",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "email exceeds maximum length of 255 characters"
        );
    }

    #[test]
    fn whitespace_is_empty() {
        let err = ValidationError::require_text("title", "   ").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn negative_display() {
        let err = ValidationError::require_non_negative("parking_spaces", -2).unwrap_err();
        assert_eq!(err.to_string(), "parking_spaces cannot be negative (got -2)");
    }
}
