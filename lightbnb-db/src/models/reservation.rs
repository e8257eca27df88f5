//! Guest reservation rows

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// A reservation joined with the reserved property and its average rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

impl GuestReservation {
    /// Number of nights booked (end date exclusive).
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
