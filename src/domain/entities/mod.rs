//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - A person who makes bookings
//! - [`Booking`] - A reservation of a place by a user
//! - [`BookingWithUser`] - A booking whose user reference has been expanded
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! (`NewUser`, `NewBooking`). Serialization lives in [`crate::api::dto`].

pub mod booking;
pub mod user;

pub use booking::{Booking, BookingWithUser, NewBooking};
pub use user::{NewUser, User};
