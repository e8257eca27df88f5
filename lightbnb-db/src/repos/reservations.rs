//! Reservation repository

use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{GuestReservation, Limit};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations with the reserved property and its
    /// average rating, earliest start date first.
    ///
    /// Properties without reviews drop out of the inner join.
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> DbResult<Vec<GuestReservation>> {
        tracing::debug!(guest_id, limit = limit.get(), "listing reservations");

        let rows = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.start_date,
                reservations.end_date,
                properties.*,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.get())
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "reservations fetched");
        Ok(rows)
    }
}
