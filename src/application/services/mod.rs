//! Business logic services for the application layer.

pub mod booking_service;
pub mod user_service;

pub use booking_service::BookingService;
pub use user_service::UserService;
