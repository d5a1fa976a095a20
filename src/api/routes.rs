//! API route configuration.

use crate::api::handlers::{
    booking_list_handler, create_booking_handler, create_user_handler, place_bookings_handler,
    user_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Booking and user routes.
///
/// # Endpoints
///
/// - `GET  /bookings`                   - List every booking
/// - `POST /bookings`                   - Create a booking
/// - `GET  /bookings/place/{place_id}`  - Bookings of a place, users expanded
/// - `GET  /users`                      - List every user
/// - `POST /users`                      - Create a user
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(booking_list_handler).post(create_booking_handler),
        )
        .route("/bookings/place/{place_id}", get(place_bookings_handler))
        .route("/users", get(user_list_handler).post(create_user_handler))
}
