//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence collaborator the services talk to:
//! create, list, count, and one explicit expansion query.
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence` - PostgreSQL
//! - `crate::infrastructure::memory` - in-process store
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod booking_repository;
pub mod user_repository;

pub use booking_repository::BookingRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
