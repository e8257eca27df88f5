//! Property repository
//!
//! - search: filtered listing with average rating, built by [`property_search`]
//! - create: validated insert returning the stored row

use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{Limit, NewProperty, Property, PropertyListing, SearchFilter};
use crate::query::property_search;

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, cheapest first.
    pub async fn search(
        &self,
        filter: &SearchFilter,
        limit: Limit,
    ) -> DbResult<Vec<PropertyListing>> {
        let plan = property_search(filter, limit);
        tracing::debug!(sql = %plan.sql(), params = ?plan.params(), "property search");

        let rows = plan.query_as::<PropertyListing>().fetch_all(self.pool).await?;

        tracing::debug!(count = rows.len(), "properties fetched");
        Ok(rows)
    }

    /// Insert a property listing and return the stored row.
    pub async fn create(&self, property: &NewProperty) -> DbResult<Property> {
        property.validate()?;

        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id,
                title,
                description,
                thumbnail_photo_url,
                cover_photo_url,
                cost_per_night,
                parking_spaces,
                number_of_bathrooms,
                number_of_bedrooms,
                country,
                street,
                city,
                province,
                post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(property.title.as_str())
        .bind(property.description.as_deref())
        .bind(property.thumbnail_photo_url.as_str())
        .bind(property.cover_photo_url.as_str())
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(property.country.as_str())
        .bind(property.street.as_str())
        .bind(property.city.as_str())
        .bind(property.province.as_str())
        .bind(property.post_code.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = created.id, owner_id = created.owner_id, "created property");
        Ok(created)
    }
}
