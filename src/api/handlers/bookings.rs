//! Handlers for booking endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::booking::{BookingItem, CreateBookingRequest, ExpandedBookingItem};
use crate::domain::entities::NewBooking;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a booking.
///
/// # Endpoint
///
/// `POST /bookings`
///
/// # Request Body
///
/// ```json
/// {
///   "placeId": "P1",
///   "userId": "6f1c2b9e-…",
///   "CheckIn": "2024-01-01",
///   "CheckOut": "2024-01-03",
///   "PartyType": "couple"
/// }
/// ```
///
/// `userId` is stored as given; the user does not have to exist.
///
/// # Response
///
/// `201 Created` with an empty body.
///
/// # Errors
///
/// Returns 400 with an empty body if any field is missing or empty, if a date
/// cannot be parsed, or if the body is not a JSON object.
pub async fn create_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    let new_booking = NewBooking::try_from(payload)?;

    state.booking_service.create_booking(new_booking).await?;

    Ok(StatusCode::CREATED)
}

/// Lists every booking with `userId` left as an id.
///
/// # Endpoint
///
/// `GET /bookings`
pub async fn booking_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingItem>>, AppError> {
    let bookings = state.booking_service.list_bookings().await?;

    Ok(Json(bookings.into_iter().map(BookingItem::from).collect()))
}

/// Lists the bookings of one place with `userId` expanded to the user record.
///
/// # Endpoint
///
/// `GET /bookings/place/{place_id}`
///
/// An unknown place returns `200 OK` with `[]`.
pub async fn place_bookings_handler(
    Path(place_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpandedBookingItem>>, AppError> {
    let bookings = state
        .booking_service
        .list_bookings_for_place(&place_id)
        .await?;

    Ok(Json(
        bookings.into_iter().map(ExpandedBookingItem::from).collect(),
    ))
}
