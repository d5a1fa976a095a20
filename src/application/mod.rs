//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers (and the admin
//! CLI) a small API per resource.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User creation and listing
//! - [`services::booking_service::BookingService`] - Booking creation and queries

pub mod services;
