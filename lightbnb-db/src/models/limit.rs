//! Result-count limits

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Default rows per request
pub const DEFAULT_LIMIT: i64 = 10;

/// Positive row limit for list and search queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Limit(i64);

impl Limit {
    /// Create a limit; zero and negative values are rejected.
    pub fn new(limit: i64) -> Result<Self, ValidationError> {
        if limit < 1 {
            return Err(ValidationError::NotPositive {
                field: "limit",
                value: limit,
            });
        }
        Ok(Self(limit))
    }

    /// Get LIMIT value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl TryFrom<i64> for Limit {
    type Error = ValidationError;

    fn try_from(limit: i64) -> Result<Self, Self::Error> {
        Self::new(limit)
    }
}

impl From<Limit> for i64 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten() {
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            Limit::new(0),
            Err(ValidationError::NotPositive {
                field: "limit",
                value: 0
            })
        );
        assert!(Limit::new(-5).is_err());
    }

    #[test]
    fn large_limits_pass_through() {
        assert_eq!(Limit::new(500).unwrap().get(), 500);
        assert_eq!(Limit::new(1).unwrap().get(), 1);
    }

    #[test]
    fn deserialize_validates() {
        let limit: Limit = serde_json::from_str("25").unwrap();
        assert_eq!(limit.get(), 25);
        assert!(serde_json::from_str::<Limit>("0").is_err());
    }
}
