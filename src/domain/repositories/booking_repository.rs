//! Repository trait for booking data access.

use crate::domain::entities::{Booking, BookingWithUser, NewBooking};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and querying bookings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a new booking and returns the stored record.
    ///
    /// The referenced user is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError>;

    /// Lists every booking, oldest first, with user references left as ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Booking>, AppError>;

    /// Lists the bookings of one place, oldest first, with each user
    /// reference expanded into the full user record.
    ///
    /// A booking whose user does not exist is returned with `user: None`.
    /// An unknown place yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_place_with_user(
        &self,
        place_id: &str,
    ) -> Result<Vec<BookingWithUser>, AppError>;

    /// Counts stored bookings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
