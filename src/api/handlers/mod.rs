//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod bookings;
pub mod health;
pub mod users;

pub use bookings::{booking_list_handler, create_booking_handler, place_bookings_handler};
pub use health::health_handler;
pub use users::{create_user_handler, user_list_handler};
