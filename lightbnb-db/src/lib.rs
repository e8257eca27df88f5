//! lightbnb-db: data access for the LightBnB rental listing app
//!
//! Users, guest reservations, and filtered property search over PostgreSQL.
//! Every repository borrows a caller-owned [`sqlx::PgPool`]; there is no
//! process-wide connection state.
//!
//! ```ignore
//! let pool = lightbnb_db::create_pool("postgres://localhost/lightbnb").await?;
//! let filter = SearchFilter { city: Some("Vancouver".into()), ..Default::default() };
//! let listings = PropertyRepo::new(&pool).search(&filter, Limit::default()).await?;
//! ```

pub mod error;
pub mod models;
pub mod pool;
pub mod query;
pub mod repos;

pub use error::{DbError, DbResult};
pub use models::{
    BindValue, Email, GuestReservation, Limit, NewProperty, NewUser, Property, PropertyListing,
    SearchFilter, User, ValidationError,
};
pub use pool::{create_pool, create_pool_with_options};
pub use query::{property_search, QueryPlan};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
pub use sqlx::PgPool;
