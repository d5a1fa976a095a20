//! PostgreSQL repository implementations.
//!
//! Queries are built with SQLx at runtime and mapped through `FromRow` row
//! structs, so building the crate does not need a live database.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and listing
//! - [`PgBookingRepository`] - Booking storage, listing and per-place lookup

pub mod pg_booking_repository;
pub mod pg_user_repository;

pub use pg_booking_repository::PgBookingRepository;
pub use pg_user_repository::PgUserRepository;
