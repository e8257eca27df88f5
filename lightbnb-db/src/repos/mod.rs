//! Repository implementations for database access
//!
//! Each repository borrows a caller-owned pool and follows these patterns:
//! - Aggregates (average rating) come from JOINs in the same query
//! - Rely on DB constraints for uniqueness, mapping violations to conflicts
//! - Inserts return the stored row

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
