//! Booking service.

use crate::domain::entities::{Booking, BookingWithUser, NewBooking};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for creating and querying bookings.
///
/// No check is made that the booked user exists, that check-in precedes
/// check-out, or that bookings of the same place do not overlap.
pub struct BookingService<R: BookingRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BookingRepository + ?Sized> BookingService<R> {
    /// Creates a new booking service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new booking.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_booking(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = self.repository.create(new_booking).await?;
        tracing::info!(
            booking_id = %booking.id,
            place_id = %booking.place_id,
            user_id = %booking.user_id,
            "Booking created"
        );
        Ok(booking)
    }

    /// Lists every booking without expanding user references.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.repository.list().await
    }

    /// Lists the bookings of a place with their users expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_bookings_for_place(
        &self,
        place_id: &str,
    ) -> Result<Vec<BookingWithUser>, AppError> {
        self.repository.find_by_place_with_user(place_id).await
    }

    /// Counts stored bookings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_bookings(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
