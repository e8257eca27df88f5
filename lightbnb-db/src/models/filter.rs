//! Property search filters
//!
//! Filters arrive from a search form (URL query) or JSON body. Numeric values
//! are kept exactly as provided; checking them is left to the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// A positional bind parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl BindValue {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// Parses command-line input: integers, then floats, anything else as text.
impl FromStr for BindValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::Integer(n));
        }
        if let Ok(n) = s.parse::<f64>() {
            if n.is_finite() {
                return Ok(Self::Float(n));
            }
        }
        Ok(Self::Text(s.to_owned()))
    }
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for BindValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Optional property search criteria; `None` means no constraint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Case-sensitive substring of the city name
    #[serde(default, deserialize_with = "blank_text_as_none")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "blank_value_as_none")]
    pub minimum_price_per_night: Option<BindValue>,

    #[serde(default, deserialize_with = "blank_value_as_none")]
    pub maximum_price_per_night: Option<BindValue>,

    #[serde(default, deserialize_with = "blank_value_as_none")]
    pub minimum_rating: Option<BindValue>,
}

// Untouched form inputs are submitted as empty strings; whitespace counts as blank
fn blank_text_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn blank_value_as_none<'de, D>(de: D) -> Result<Option<BindValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BindValue>::deserialize(de)?;
    Ok(value.filter(|v| !v.is_blank()))
}
