//! Domain models with validation at construction
//!
//! Caller input (new users, new listings, result limits) is validated when
//! these types are built. Invalid input returns ValidationError, not panic.
//! Row types mirror the `users`, `properties` and `reservations` tables.

pub mod email;
pub mod filter;
pub mod limit;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use email::Email;
pub use filter::{BindValue, SearchFilter};
pub use limit::Limit;
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::GuestReservation;
pub use user::{NewUser, User};
pub use validation::ValidationError;
