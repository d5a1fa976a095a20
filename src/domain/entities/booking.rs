//! Domain entities representing bookings.

use chrono::{DateTime, Utc};

use super::user::User;

/// A reservation of a place by a user.
///
/// `place_id` refers to a place managed outside this service. `user_id` refers
/// to a [`User`] but is not checked against the users store, so it may dangle.
/// Check-in is not required to precede check-out.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub party_type: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Replaces the user reference with the referenced record.
    ///
    /// Pass `None` when the referenced user does not exist.
    pub fn with_user(self, user: Option<User>) -> BookingWithUser {
        BookingWithUser {
            id: self.id,
            place_id: self.place_id,
            user,
            check_in: self.check_in,
            check_out: self.check_out,
            party_type: self.party_type,
            created_at: self.created_at,
        }
    }
}

/// A booking with its user reference expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithUser {
    pub id: String,
    pub place_id: String,
    pub user: Option<User>,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub party_type: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new booking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub place_id: String,
    pub user_id: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub party_type: String,
}
