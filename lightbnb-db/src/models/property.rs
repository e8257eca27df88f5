//! Property listings

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Property record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in the store's unit; never rescaled here
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Search result row: a property with its average review rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Input for creating a property listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

impl NewProperty {
    /// Check required text and non-negative counts.
    ///
    /// Photo URLs are not checked; the listing form accepts any string.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("title", &self.title)?;
        ValidationError::require_text("country", &self.country)?;
        ValidationError::require_text("street", &self.street)?;
        ValidationError::require_text("city", &self.city)?;
        ValidationError::require_text("province", &self.province)?;
        ValidationError::require_text("post_code", &self.post_code)?;

        ValidationError::require_non_negative("cost_per_night", self.cost_per_night)?;
        ValidationError::require_non_negative("parking_spaces", self.parking_spaces)?;
        ValidationError::require_non_negative("number_of_bathrooms", self.number_of_bathrooms)?;
        ValidationError::require_non_negative("number_of_bedrooms", self.number_of_bedrooms)?;

        Ok(())
    }
}
