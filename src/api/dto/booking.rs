//! DTOs for booking endpoints.
//!
//! Field names on the wire are `placeId`, `userId`, `CheckIn`, `CheckOut`
//! and `PartyType`, which is what existing clients send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::user::UserItem;
use crate::domain::entities::{Booking, BookingWithUser, NewBooking};
use crate::error::AppError;
use crate::utils::timestamp::parse_timestamp;

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[serde(rename = "placeId")]
    #[validate(required, length(min = 1))]
    pub place_id: Option<String>,

    #[serde(rename = "userId")]
    #[validate(required, length(min = 1))]
    pub user_id: Option<String>,

    #[serde(rename = "CheckIn")]
    #[validate(required, length(min = 1))]
    pub check_in: Option<String>,

    #[serde(rename = "CheckOut")]
    #[validate(required, length(min = 1))]
    pub check_out: Option<String>,

    /// Free-form label such as "couple" or "family".
    #[serde(rename = "PartyType")]
    #[validate(required, length(min = 1))]
    pub party_type: Option<String>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = AppError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let (Some(place_id), Some(user_id), Some(check_in), Some(check_out), Some(party_type)) = (
            req.place_id,
            req.user_id,
            req.check_in,
            req.check_out,
            req.party_type,
        ) else {
            return Err(AppError::bad_request(
                "placeId, userId, CheckIn, CheckOut and PartyType are required",
                json!({}),
            ));
        };

        let check_in = parse_timestamp(&check_in).map_err(|e| {
            AppError::bad_request("Invalid CheckIn", json!({ "reason": e.to_string() }))
        })?;
        let check_out = parse_timestamp(&check_out).map_err(|e| {
            AppError::bad_request("Invalid CheckOut", json!({ "reason": e.to_string() }))
        })?;

        Ok(NewBooking {
            place_id,
            user_id,
            check_in,
            check_out,
            party_type,
        })
    }
}

/// JSON representation of a booking with its user reference as an id.
#[derive(Debug, Serialize)]
pub struct BookingItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "placeId")]
    pub place_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "CheckIn")]
    pub check_in: DateTime<Utc>,
    #[serde(rename = "CheckOut")]
    pub check_out: DateTime<Utc>,
    #[serde(rename = "PartyType")]
    pub party_type: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingItem {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            place_id: b.place_id,
            user_id: b.user_id,
            check_in: b.check_in,
            check_out: b.check_out,
            party_type: b.party_type,
            created_at: b.created_at,
        }
    }
}

/// JSON representation of a booking with `userId` expanded.
///
/// `userId` is `null` when the referenced user does not exist.
#[derive(Debug, Serialize)]
pub struct ExpandedBookingItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "placeId")]
    pub place_id: String,
    #[serde(rename = "userId")]
    pub user: Option<UserItem>,
    #[serde(rename = "CheckIn")]
    pub check_in: DateTime<Utc>,
    #[serde(rename = "CheckOut")]
    pub check_out: DateTime<Utc>,
    #[serde(rename = "PartyType")]
    pub party_type: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<BookingWithUser> for ExpandedBookingItem {
    fn from(b: BookingWithUser) -> Self {
        Self {
            id: b.id,
            place_id: b.place_id,
            user: b.user.map(UserItem::from),
            check_in: b.check_in,
            check_out: b.check_out,
            party_type: b.party_type,
            created_at: b.created_at,
        }
    }
}
